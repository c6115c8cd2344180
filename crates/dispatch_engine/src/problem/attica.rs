use crate::problem::{minutes::Minutes, zone::ZoneDetail};

/// (name, latitude, longitude, baseline delivery minutes), in dispatch order.
const ATTICA_ZONES: [(&str, f64, f64, u32); 14] = [
    ("Α ΑΤΤΙΚ", 38.062133, 23.600233, 120),
    ("Β ΑΤΤΙΚ", 37.952500, 23.887300, 140),
    ("Β1 ΑΤΤΙΚ", 37.891400, 23.969700, 150),
    ("Γ ΑΤΤΙΚ", 37.975200, 23.700700, 120),
    ("Γ1", 38.157150, 23.778900, 160),
    ("Δ ΠΕΡ", 37.940100, 22.951800, 180),
    ("Ε ΠΕΡ", 38.435700, 22.873500, 200),
    ("E1", 38.322100, 23.319200, 220),
    ("ΑΡΓΟΛ", 37.630800, 22.724200, 240),
    ("ΣΤ ΠΕΛ", 37.073600, 22.429700, 260),
    ("Ν ΛΑΚ", 36.508500, 22.830100, 280),
    ("ΙΑ ΠΕΡ", 36.972400, 22.668800, 300),
    ("ΙΒ ΠΕΡ", 37.385500, 23.165500, 320),
    ("ΦΘΙΩΤ", 38.902200, 22.441700, 340),
];

/// Zones served out of the Attica depot.
pub fn attica_zones() -> Vec<ZoneDetail> {
    ATTICA_ZONES
        .iter()
        .map(|&(name, latitude, longitude, minutes)| {
            ZoneDetail::new(name, Minutes::new(minutes), latitude, longitude)
        })
        .collect()
}
