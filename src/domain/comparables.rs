use crate::domain::entities::property::Property;

/// Other listings in the subject's neighborhood with the same property
/// type, closest price per m² first.
pub fn comparables(catalog: &[Property], subject: &Property, limit: usize) -> Vec<Property> {
    let mut candidates: Vec<&Property> = catalog
        .iter()
        .filter(|p| {
            p.id != subject.id
                && p.property_type == subject.property_type
                && p.neighborhood.eq_ignore_ascii_case(&subject.neighborhood)
        })
        .collect();
    candidates.sort_by(|a, b| {
        let da = (a.price_per_sqm - subject.price_per_sqm).abs();
        let db = (b.price_per_sqm - subject.price_per_sqm).abs();
        da.total_cmp(&db)
    });
    candidates.into_iter().take(limit).cloned().collect()
}
