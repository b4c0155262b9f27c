//! Equipment card thumbnails
//!
//! Cards without a picture start out showing the first letter of the item's
//! name; [`load_equipment_icons`] swaps those placeholders for the generic
//! excavator icon.

use tracing::debug;

use crate::models::Equipment;

/// Generic equipment icon
pub const EQUIPMENT_ICON_SRC: &str = "/images/excavator-icon.svg";

pub const EQUIPMENT_ICON_ALT: &str = "Equipment Icon";

pub const EQUIPMENT_ICON_STYLE: &str = "width: 120px; height: 120px; object-fit: contain;";

/// What an equipment card shows in its image slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentImage {
    /// Letter placeholder
    Initial(char),
    /// Rendered image
    Image {
        src: String,
        alt: String,
        style: Option<String>,
    },
    /// Nothing to show
    Empty,
}

impl EquipmentImage {
    /// The generic excavator icon
    pub fn icon() -> Self {
        EquipmentImage::Image {
            src: EQUIPMENT_ICON_SRC.to_string(),
            alt: EQUIPMENT_ICON_ALT.to_string(),
            style: Some(EQUIPMENT_ICON_STYLE.to_string()),
        }
    }

    /// Initial image slot for an item: its picture, else its initial
    pub fn for_equipment(equipment: &Equipment) -> Self {
        if let Some(url) = equipment.image_url.as_deref().filter(|url| !url.is_empty()) {
            return EquipmentImage::Image {
                src: url.to_string(),
                alt: equipment.name.clone().unwrap_or_default(),
                style: None,
            };
        }

        match equipment.initial() {
            Some(initial) => EquipmentImage::Initial(initial),
            None => EquipmentImage::Empty,
        }
    }
}

/// Replace every letter placeholder with the equipment icon
///
/// Returns the number of replaced placeholders.
pub fn load_equipment_icons(images: &mut [EquipmentImage]) -> usize {
    let mut replaced = 0;

    for image in images.iter_mut() {
        if matches!(image, EquipmentImage::Initial(_)) {
            *image = EquipmentImage::icon();
            replaced += 1;
        }
    }

    debug!("Replaced {} equipment placeholders", replaced);
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, image_url: Option<&str>) -> Equipment {
        Equipment {
            name: Some(name.to_string()),
            image_url: image_url.map(str::to_string),
            ..Equipment::default()
        }
    }

    #[test]
    fn test_image_slot_for_equipment() {
        assert_eq!(
            EquipmentImage::for_equipment(&named("bulldozer", None)),
            EquipmentImage::Initial('B')
        );
        assert_eq!(
            EquipmentImage::for_equipment(&named("Crane", Some(""))),
            EquipmentImage::Initial('C')
        );
        assert_eq!(
            EquipmentImage::for_equipment(&named("Crane", Some("/img/crane.png"))),
            EquipmentImage::Image {
                src: "/img/crane.png".to_string(),
                alt: "Crane".to_string(),
                style: None,
            }
        );
        assert_eq!(
            EquipmentImage::for_equipment(&Equipment::default()),
            EquipmentImage::Empty
        );
    }

    #[test]
    fn test_only_placeholders_are_replaced() {
        let photo = EquipmentImage::Image {
            src: "/img/crane.png".to_string(),
            alt: "Crane".to_string(),
            style: None,
        };
        let mut images = vec![
            EquipmentImage::Initial('B'),
            photo.clone(),
            EquipmentImage::Empty,
            EquipmentImage::Initial('D'),
        ];

        assert_eq!(load_equipment_icons(&mut images), 2);
        assert_eq!(images[0], EquipmentImage::icon());
        assert_eq!(images[1], photo);
        assert_eq!(images[2], EquipmentImage::Empty);
        assert_eq!(images[3], EquipmentImage::icon());

        // Running again finds nothing left to replace
        assert_eq!(load_equipment_icons(&mut images), 0);
    }
}
