//! Seed collections installed when no persisted state is usable.
//!
//! # Invariants
//! - Seed ids and field contents are fixed literals, so repeated seeding
//!   is deterministic and testable.
//! - Seed photo lists start empty.

use crate::model::catalog::{CatalogState, Character, Furniture};

/// Returns the documented default pair of seed collections.
pub fn default_catalog_state() -> CatalogState {
    CatalogState {
        characters: vec![
            Character {
                id: "1".to_string(),
                name: "巧克力兔妹妹".to_string(),
                family: "巧克力兔家族".to_string(),
                animal_type: "兔子".to_string(),
                tags: vec!["有點害羞".to_string(), "愛畫畫".to_string()],
                rating: 5,
                description: "轉學來到森林學校的新同學...".to_string(),
                photos: Vec::new(),
            },
            Character {
                id: "2".to_string(),
                name: "灰熊老爸".to_string(),
                family: "熊家族".to_string(),
                animal_type: "熊".to_string(),
                tags: vec!["愛做料理".to_string()],
                rating: 4,
                description: "喜歡在家裡做早餐給家人...".to_string(),
                photos: Vec::new(),
            },
        ],
        furnitures: vec![
            Furniture {
                id: "f1".to_string(),
                name: "小木桌".to_string(),
                category: "桌子".to_string(),
                tags: vec!["木製".to_string()],
                description: "森林小屋用的小木桌".to_string(),
                photos: Vec::new(),
            },
            Furniture {
                id: "f2".to_string(),
                name: "圓背椅".to_string(),
                category: "椅子".to_string(),
                tags: vec!["舒適".to_string()],
                description: "給小朋友坐的舒適椅子".to_string(),
                photos: Vec::new(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::default_catalog_state;

    #[test]
    fn seeding_is_deterministic() {
        assert_eq!(default_catalog_state(), default_catalog_state());
    }

    #[test]
    fn seed_photo_lists_start_empty() {
        let state = default_catalog_state();
        assert!(state.characters.iter().all(|c| c.photos.is_empty()));
        assert!(state.furnitures.iter().all(|f| f.photos.is_empty()));
    }
}
