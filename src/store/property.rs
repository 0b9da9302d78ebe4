//! Property draft slice: plain field setters and image management.
//!
//! Not a state machine; the only enforced rule is that at most one image
//! is the cover, and `SetCoverImage` makes it exactly the matching one.

use crate::models::{GeoLocation, PropertyImage, UnitCounts};

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub step: u8,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub title: String,
    pub units: UnitCounts,
    pub location: Option<GeoLocation>,
    pub images: Vec<PropertyImage>,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            step: 1,
            category: None,
            sub_category: None,
            title: String::new(),
            units: UnitCounts::default(),
            location: None,
            images: Vec::new(),
        }
    }
}

impl PropertyDraft {
    pub fn cover_image(&self) -> Option<&PropertyImage> {
        self.images.iter().find(|image| image.is_cover)
    }
}

#[derive(Debug, Clone)]
pub enum PropertyAction {
    SetStep(u8),
    SetCategory(String),
    SetSubCategory(String),
    SetTitle(String),
    SetUnits(UnitCounts),
    SetLocation(GeoLocation),
    AddImage(PropertyImage),
    RemoveImage(String),
    SetCoverImage(String),
    Reset,
}

pub fn reduce(state: &mut PropertyDraft, action: PropertyAction) {
    match action {
        PropertyAction::SetStep(step) => {
            state.step = step.max(1);
        }
        PropertyAction::SetCategory(category) => {
            state.category = Some(category);
        }
        PropertyAction::SetSubCategory(sub_category) => {
            state.sub_category = Some(sub_category);
        }
        PropertyAction::SetTitle(title) => {
            state.title = title;
        }
        PropertyAction::SetUnits(units) => {
            state.units = units;
        }
        PropertyAction::SetLocation(location) => {
            state.location = Some(location);
        }
        PropertyAction::AddImage(image) => {
            if image.is_cover {
                for existing in &mut state.images {
                    existing.is_cover = false;
                }
            }
            state.images.push(image);
        }
        PropertyAction::RemoveImage(url) => {
            state.images.retain(|image| image.url != url);
        }
        PropertyAction::SetCoverImage(url) => {
            for image in &mut state.images {
                image.is_cover = image.url == url;
            }
        }
        PropertyAction::Reset => {
            *state = PropertyDraft::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, is_cover: bool) -> PropertyImage {
        PropertyImage {
            url: url.to_string(),
            is_cover,
        }
    }

    #[test]
    fn set_cover_image_leaves_exactly_one_cover() {
        let mut state = PropertyDraft::default();
        reduce(&mut state, PropertyAction::AddImage(image("a", true)));
        reduce(&mut state, PropertyAction::AddImage(image("b", false)));
        reduce(&mut state, PropertyAction::SetCoverImage("b".to_string()));

        assert_eq!(
            state.images,
            vec![image("a", false), image("b", true)]
        );
        let covers = state.images.iter().filter(|i| i.is_cover).count();
        assert_eq!(covers, 1);
    }

    #[test]
    fn adding_a_cover_image_demotes_the_previous_cover() {
        let mut state = PropertyDraft::default();
        reduce(&mut state, PropertyAction::AddImage(image("a", true)));
        reduce(&mut state, PropertyAction::AddImage(image("b", true)));

        let covers = state.images.iter().filter(|i| i.is_cover).count();
        assert_eq!(covers, 1);
        assert_eq!(state.cover_image().unwrap().url, "b");
    }

    #[test]
    fn set_cover_with_unknown_url_clears_all_covers() {
        let mut state = PropertyDraft::default();
        reduce(&mut state, PropertyAction::AddImage(image("a", true)));
        reduce(&mut state, PropertyAction::SetCoverImage("zz".to_string()));
        assert!(state.cover_image().is_none());
    }

    #[test]
    fn remove_image_by_url() {
        let mut state = PropertyDraft::default();
        reduce(&mut state, PropertyAction::AddImage(image("a", false)));
        reduce(&mut state, PropertyAction::AddImage(image("b", false)));
        reduce(&mut state, PropertyAction::RemoveImage("a".to_string()));
        assert_eq!(state.images, vec![image("b", false)]);
    }
}
