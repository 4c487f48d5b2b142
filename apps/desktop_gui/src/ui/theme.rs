use egui::Color32;
use table_core::{SortIndicator, UserTone};

pub const LINK: Color32 = Color32::from_rgb(72, 95, 199);
pub const DANGER: Color32 = Color32::from_rgb(241, 70, 104);
pub const INFO: Color32 = Color32::from_rgb(62, 142, 208);
pub const SUCCESS: Color32 = Color32::from_rgb(72, 199, 142);

pub fn user_tone_color(tone: UserTone) -> Color32 {
    match tone {
        UserTone::Male => LINK,
        UserTone::Female => DANGER,
    }
}

pub fn sort_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Unsorted => "⇅",
        SortIndicator::Ascending => "▲",
        SortIndicator::Descending => "▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_indicator_has_its_own_glyph() {
        assert_ne!(sort_glyph(SortIndicator::Ascending), sort_glyph(SortIndicator::Descending));
        assert_ne!(sort_glyph(SortIndicator::Unsorted), sort_glyph(SortIndicator::Ascending));
    }

    #[test]
    fn owners_are_coloured_by_sex() {
        assert_eq!(user_tone_color(UserTone::Male), LINK);
        assert_eq!(user_tone_color(UserTone::Female), DANGER);
    }
}
