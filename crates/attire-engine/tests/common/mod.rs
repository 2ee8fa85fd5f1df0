//! Shared catalog fixtures for the integration suites.

use attire_core::catalog::{CatalogItem, SportMeta};
use attire_core::vocab::{Colour, Fit, Gender, Role, Sport, Vibe};

/// Builder for catalog fixtures; defaults to a plain black unisex garment.
pub struct ItemBuilder {
    item: CatalogItem,
}

pub fn item(id: &str, role: Role) -> ItemBuilder {
    ItemBuilder {
        item: CatalogItem {
            id: id.to_string(),
            image: format!("img/{id}.jpg"),
            category: role,
            subtype: String::new(),
            colours: vec![Colour::Black],
            vibes: vec![],
            gender: Gender::Unisex,
            fit: None,
            sport_meta: None,
            name: id.replace('-', " "),
            name_normalized: id.replace('-', " "),
            entities: vec![],
        },
    }
}

impl ItemBuilder {
    pub fn colours(mut self, colours: &[Colour]) -> Self {
        self.item.colours = colours.to_vec();
        self
    }

    pub fn vibes(mut self, vibes: &[Vibe]) -> Self {
        self.item.vibes = vibes.to_vec();
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.item.fit = Some(fit);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.item.gender = gender;
        self
    }

    pub fn kit(mut self, sport: Sport, teams: &[&str]) -> Self {
        self.item.sport_meta = Some(SportMeta {
            sport,
            teams: teams.iter().map(|t| t.to_string()).collect(),
            is_kit: true,
        });
        self
    }

    pub fn build(self) -> CatalogItem {
        self.item
    }
}
