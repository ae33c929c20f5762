use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

const OBJECT_PREFIX: &str = "image_";
const OBJECT_EXTENSION: &str = ".png";
const ID_LEN: usize = 8;

/// Name for a freshly generated image: local second-resolution timestamp plus
/// 8 hex characters of a v4 UUID. Collisions are unlikely, not impossible.
pub fn generate_object_name() -> String {
    let id = Uuid::new_v4().simple().to_string();
    object_name_at(&Local::now(), &id)
}

pub fn object_name_at<Tz>(timestamp: &DateTime<Tz>, id: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let id: String = id.chars().take(ID_LEN).collect();
    format!(
        "{}{}_{}{}",
        OBJECT_PREFIX,
        timestamp.format("%Y%m%d_%H%M%S"),
        id,
        OBJECT_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_name_at() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        let name = object_name_at(&timestamp, "0f3a9c21d4e54b7f");
        assert_eq!(name, "image_20240309_070503_0f3a9c21.png");
    }

    #[test]
    fn test_generated_name_shape() {
        let name = generate_object_name();
        assert!(name.starts_with("image_"));
        assert!(name.ends_with(".png"));
        // image_ + 8 + _ + 6 + _ + 8 + .png
        assert_eq!(name.len(), 6 + 8 + 1 + 6 + 1 + 8 + 4);
    }
}
