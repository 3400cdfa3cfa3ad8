use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("(?i)", $pat)).unwrap())
  };
}

/// Bare brand names, used where no icon naming convention applies.
pub(crate) static BRAND_NAME: LazyLock<Regex> = re!(concat!(
  r"twitter|facebook|instagram|linkedin|youtube|tiktok|snapchat|pinterest|",
  r"reddit|tumblr|whatsapp|telegram|discord|twitch|mastodon|bluesky|threads|",
  r"x\.com"
));

/// Icon-font and theme class naming conventions for social icons.
pub(crate) static ICON_CLASS: LazyLock<Regex> = re!(concat!(
  r"\bfa-(?:twitter|x-twitter|facebook|instagram|linkedin|tiktok|youtube|",
  r"snapchat|pinterest|reddit|tumblr|whatsapp|telegram|discord|twitch|",
  r"mastodon|threads)\b",
  r"|\bicon-(?:twitter|x|facebook|instagram|linkedin|tiktok|youtube|snapchat|",
  r"pinterest|reddit|tumblr|whatsapp|telegram|discord|twitch|mastodon|",
  r"threads|social)\b",
  r"|\bsocial-icon\b",
  r"|\bshare-(?:twitter|facebook|linkedin|pinterest|reddit|whatsapp|",
  r"telegram)\b",
  r"|\b(?:twitter|facebook|instagram|linkedin|youtube|tiktok|mastodon|",
  r"bluesky|threads)-icon\b"
));

/// Class or id values that make an element a share widget candidate.
pub(crate) static SHARE_HINT: LazyLock<Regex> = re!(r"share|social");

/// Whole-word share vocabulary required on top of [`SHARE_HINT`].
pub(crate) static SHARE_WORD: LazyLock<Regex> =
  re!(r"\b(?:share|social|follow)\b");
