/// A cheese sauce variant. Display content only; the engine keys everything
/// by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flavor {
    pub id: &'static str,
    pub name: &'static str,
    /// 0 (mild) to 5 (face melter)
    pub heat_level: u8,
    pub emoji: &'static str,
    pub badge: &'static str,
    pub is_star: bool,
}

impl Flavor {
    /// Heat rendered as peppers, e.g. "🌶🌶" for level 2 and "mild" for 0.
    pub fn heat_label(&self) -> String {
        if self.heat_level == 0 {
            return "mild".to_string();
        }
        "🌶".repeat(usize::from(self.heat_level))
    }
}

// Catalog order doubles as the quiz tie-break priority.
pub const FLAVORS: [Flavor; 5] = [
    Flavor {
        id: "white-cheese",
        name: "White Cheese Sauce",
        heat_level: 0,
        emoji: "🤍",
        badge: "Classic Mild",
        is_star: false,
    },
    Flavor {
        id: "orange-spice",
        name: "Orange Cheese with Spice",
        heat_level: 2,
        emoji: "🧡",
        badge: "Signature Blend",
        is_star: false,
    },
    Flavor {
        id: "mozz-pure",
        name: "Mozz Pure",
        heat_level: 0,
        emoji: "💙",
        badge: "Smooth Operator",
        is_star: false,
    },
    Flavor {
        id: "cheddar-beddar",
        name: "Cheddar is Beddar",
        heat_level: 1,
        emoji: "🧀",
        badge: "Bold & Sharp",
        is_star: false,
    },
    Flavor {
        id: "mega-spice",
        name: "MEGA SPICE Face Melter",
        heat_level: 5,
        emoji: "🔥",
        badge: "Maximum Heat",
        is_star: true,
    },
];

pub fn find_flavor(id: &str) -> Option<&'static Flavor> {
    FLAVORS.iter().find(|f| f.id == id)
}

/// Flavor ids in tie-break order: earlier wins a tie.
pub fn priority() -> Vec<String> {
    FLAVORS.iter().map(|f| f.id.to_string()).collect()
}
