use contracts::domain::a001_species::aggregate::{Linkage, Species};
use contracts::domain::a001_species::facets::FacetIndex;
use contracts::domain::a002_recommendation::aggregate::Recommendation;

/// Occurrence counter that keeps first-seen order so ties rank by first
/// appearance in the dataset.
struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    fn new() -> Tally {
        Tally { entries: Vec::new() }
    }

    fn bump(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(known, _)| known == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    fn top(mut self, limit: usize) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(limit);
        self.entries
    }
}

/// Compose the three audience-specific recommendation blocks.
///
/// The prose is fixed; the figures inside it come from the collection so the
/// blocks stay truthful when the workbook changes. Content is HTML because
/// the dashboard injects these blocks verbatim.
pub fn build_recommendations(species: &[Species]) -> Vec<Recommendation> {
    let mut district_tally = Tally::new();
    let mut parts_tally = Tally::new();
    for record in species {
        for district in &record.districts {
            district_tally.bump(district);
        }
        for part in &record.parts_used {
            parts_tally.bump(part);
        }
    }

    let top_districts = district_tally
        .top(5)
        .into_iter()
        .map(|(district, count)| format!("{} ({})", district, count))
        .collect::<Vec<_>>()
        .join(", ");
    let top_parts = parts_tally
        .top(4)
        .into_iter()
        .map(|(part, count)| format!("{} ({})", part.to_lowercase(), count))
        .collect::<Vec<_>>()
        .join(", ");

    let ntfp_share = species.iter().filter(|s| s.species_type == "NTFP").count();
    let agro_share = species
        .iter()
        .filter(|s| s.species_type == "Agro-commodity")
        .count();
    let market_side_focus = species
        .iter()
        .filter(|s| matches!(s.linkage, Linkage::Forward | Linkage::Integrated))
        .count();
    let habitat_kinds = FacetIndex::build(species).habitats.len();

    vec![
        Recommendation {
            title: "For Community Enterprises".to_string(),
            content: format!(
                "<ul class=\"list-disc list-inside space-y-2 text-slate-600\">\
                 <li><strong>Build layered commodity clusters:</strong> Anchor operations in lead districts such as {top_districts} so harvest windows, aggregation points, and compliance support are synchronised across villages.</li>\
                 <li><strong>Upgrade primary handling around priority parts:</strong> Channel working capital into micro-drying, sorting, and moisture control units focused on {top_parts}, cutting losses and protecting quality premiums.</li>\
                 <li><strong>Design community working-capital cushions:</strong> Blend SHG savings, CSR infusions, and credit guarantees to underwrite harvest advances, enabling members to negotiate confidently with large buyers.</li>\
                 <li><strong>Institutionalise real-time market intelligence:</strong> Nominate marketing stewards to track prices, buyer specs, and compliance shifts so field plans can be adjusted before the season peaks.</li>\
                 </ul>"
            ),
        },
        Recommendation {
            title: "For Entrepreneurs".to_string(),
            content: format!(
                "<ul class=\"list-disc list-inside space-y-2 text-slate-600\">\
                 <li><strong>Craft differentiated product portfolios:</strong> Translate the mix of {ntfp_share} NTFPs and {agro_share} agro-commodities into distinct wellness, gourmet, and regenerative product lines with clear market narratives.</li>\
                 <li><strong>Invest in value-chain depth:</strong> {market_side_focus} commodities need forward or integrated support\u{2014}pair extraction units, cold-press facilities, and packaging lines with long-term raw-material contracts.</li>\
                 <li><strong>Embed traceability and sustainability:</strong> Capture batch-wise data on origin, plant parts, and conservation status to meet clean label, ESG, and export audit expectations.</li>\
                 <li><strong>Adopt omnichannel market access:</strong> Combine tourism retail, institutional buyers, and digital marketplaces so volumes can be shifted quickly when seasonal gluts occur.</li>\
                 </ul>"
            ),
        },
        Recommendation {
            title: "For Planners & Support Agencies".to_string(),
            content: format!(
                "<ul class=\"list-disc list-inside space-y-2 text-slate-600\">\
                 <li><strong>Tailor policy support by habitat:</strong> With {habitat_kinds} habitat categories represented, extend differentiated extension packages, varietal demonstrations, and climate advisories.</li>\
                 <li><strong>Strengthen logistics and shared infrastructure:</strong> Budget for aggregation hubs, ambient storage, and digital quality labs so hill-based producers can service urban demand without distress sales.</li>\
                 <li><strong>Formalise inclusive financing:</strong> Expand interest subvention, risk-sharing facilities, and blended finance pipelines that reward outcome-based milestones like traceability or reduced wild harvest.</li>\
                 <li><strong>Institutionalise market development platforms:</strong> Convene annual buyer-seller forums, export readiness clinics, and branding accelerators that equip local enterprises to participate in premium value chains.</li>\
                 </ul>"
            ),
        },
    ]
}
