// SPDX-License-Identifier: MIT

//! Static reference data served on the logging form.

/// A known drink and whether it is espresso-based.
pub struct Drink {
    pub name: &'static str,
    pub espresso_based: bool,
}

pub const DRINKS: &[Drink] = &[
    // espresso-based:
    Drink { name: "Latte", espresso_based: true },
    Drink { name: "Mocha", espresso_based: true },
    Drink { name: "Breve", espresso_based: true },
    Drink { name: "Espresso", espresso_based: true },
    Drink { name: "Macchiato", espresso_based: true },
    Drink { name: "Cortado", espresso_based: true },
    Drink { name: "Americano", espresso_based: true },
    Drink { name: "Cappuccino", espresso_based: true },
    Drink { name: "Flat white", espresso_based: true },
    Drink { name: "Café Cubano", espresso_based: true },
    Drink { name: "Affogato", espresso_based: true },
    Drink { name: "Ristretto", espresso_based: true },
    Drink { name: "Corretto", espresso_based: true },
    Drink { name: "Turkish coffee", espresso_based: true },
    // non-espresso based:
    Drink { name: "Coffee", espresso_based: false },
    Drink { name: "Cold brew", espresso_based: false },
    Drink { name: "Iced coffee", espresso_based: false },
    Drink { name: "Decaf coffee", espresso_based: false },
    Drink { name: "Café au lait", espresso_based: false },
];

/// A brew method with its form icon.
pub struct BrewMethod {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const BREW_METHODS: &[BrewMethod] = &[
    BrewMethod { name: "Espresso", icon: "espresso-machine.png" },
    BrewMethod { name: "Chemex", icon: "chemex.png" },
    BrewMethod { name: "Aeropress", icon: "aeropress.png" },
    BrewMethod { name: "Hario V60", icon: "v60.png" },
    BrewMethod { name: "French press", icon: "french-press.png" },
    BrewMethod { name: "Dripper", icon: "dripper.png" },
    BrewMethod { name: "Kyoto Dripper", icon: "kyoto.png" },
    BrewMethod { name: "Moka Pot", icon: "moka.png" },
    BrewMethod { name: "Turkish coffee", icon: "turkish.png" },
];

/// Origin countries grouped by region.
pub struct OriginRegion {
    pub name: &'static str,
    pub countries: &'static [&'static str],
}

pub const ORIGIN_REGIONS: &[OriginRegion] = &[
    OriginRegion {
        name: "Africa",
        countries: &["Kenya", "Ethiopia", "Nigeria", "Burundi", "Rwanda"],
    },
    OriginRegion {
        name: "Americas",
        countries: &[
            "Colombia",
            "Venezuela",
            "Brazil",
            "Peru",
            "Cuba",
            "Ecuador",
            "Honduras",
            "Mexico",
            "Costa Rica",
        ],
    },
    OriginRegion {
        name: "Asia",
        countries: &["Indonesia", "India", "Vietnam"],
    },
];
