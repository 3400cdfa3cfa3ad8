use super::*;

/// A social media or sharing service and the domains that belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Platform {
  pub name: &'static str,
  pub domains: &'static [&'static str],
}

impl Platform {
  /// Whether `host` is one of this platform's domains or a subdomain of one.
  ///
  /// `host` is expected to be lower-cased with any leading `www.` removed.
  #[must_use]
  pub fn owns_host(&self, host: &str) -> bool {
    self
      .domains
      .iter()
      .any(|domain| domain::host_matches(host, domain))
  }
}

macro_rules! platform {
  ($name:expr, [$($domain:expr),+ $(,)?]) => {
    Platform {
      name: $name,
      domains: &[$($domain),+],
    }
  };
}

static PLATFORMS: &[Platform] = &[
  platform!("Twitter / X", ["twitter.com", "x.com"]),
  platform!("Facebook", ["facebook.com", "fb.com", "fb.me"]),
  platform!("Instagram", ["instagram.com", "instagr.am"]),
  platform!("LinkedIn", ["linkedin.com", "lnkd.in"]),
  platform!("YouTube", ["youtube.com", "youtu.be"]),
  platform!("TikTok", ["tiktok.com"]),
  platform!("Snapchat", ["snapchat.com"]),
  platform!("Pinterest", ["pinterest.com", "pin.it"]),
  platform!("Reddit", ["reddit.com", "redd.it"]),
  platform!("Tumblr", ["tumblr.com"]),
  platform!("WhatsApp", ["whatsapp.com", "wa.me"]),
  platform!("Telegram", ["telegram.org", "t.me"]),
  platform!("Discord", ["discord.com", "discord.gg"]),
  platform!("Twitch", ["twitch.tv"]),
  platform!(
    "Mastodon",
    [
      "mastodon.social",
      "mastodon.online",
      "mstdn.social",
      "fosstodon.org",
      "hachyderm.io",
      "infosec.exchange",
    ]
  ),
  platform!("Bluesky", ["bsky.app", "bsky.social"]),
  platform!("Threads", ["threads.net"]),
  platform!(
    "Fediverse (Other)",
    [
      "post.news",
      "cohost.org",
      "pixelfed.social",
      "lemmy.world",
      "lemmy.ml",
      "kbin.social",
    ]
  ),
  platform!(
    "Chinese Platforms",
    ["weibo.com", "weibo.cn", "qq.com", "wechat.com"]
  ),
  platform!("Russian Platforms", ["vk.com", "ok.ru"]),
  platform!("Messaging", ["line.me"]),
  platform!("Professional", ["xing.com"]),
  platform!(
    "Alt Platforms",
    [
      "clubhouse.com",
      "parler.com",
      "gab.com",
      "truthsocial.com",
      "gettr.com",
      "minds.com",
      "mewe.com",
    ]
  ),
  platform!(
    "Creative",
    ["flickr.com", "deviantart.com", "behance.net", "dribbble.com"]
  ),
  platform!("Publishing", ["medium.com", "substack.com"]),
  platform!("Funding", ["patreon.com", "ko-fi.com", "buymeacoffee.com"]),
  platform!(
    "Link Aggregators",
    ["linktree.com", "linktr.ee", "beacons.ai", "carrd.co", "about.me"]
  ),
];

/// Name fragments seen in class names, labels and image sources, mapped to
/// the platform they identify. Order decides which platform wins when a
/// text mentions several.
static FRAGMENTS: &[(&str, &str)] = &[
  ("twitter", "Twitter / X"),
  ("x-twitter", "Twitter / X"),
  ("x.com", "Twitter / X"),
  ("facebook", "Facebook"),
  ("instagram", "Instagram"),
  ("linkedin", "LinkedIn"),
  ("youtube", "YouTube"),
  ("tiktok", "TikTok"),
  ("snapchat", "Snapchat"),
  ("pinterest", "Pinterest"),
  ("reddit", "Reddit"),
  ("tumblr", "Tumblr"),
  ("whatsapp", "WhatsApp"),
  ("telegram", "Telegram"),
  ("discord", "Discord"),
  ("twitch", "Twitch"),
  ("mastodon", "Mastodon"),
  ("bluesky", "Bluesky"),
  ("threads", "Threads"),
];

/// Every platform whose name fragment occurs in `text`, in fragment order.
///
/// Matching is case-insensitive. A platform may be yielded more than once.
pub fn fragment_platforms(text: &str) -> impl Iterator<Item = &'static str> {
  let lower = text.to_lowercase();

  FRAGMENTS
    .iter()
    .filter(move |(fragment, _)| lower.contains(fragment))
    .map(|(_, platform)| *platform)
}

#[must_use]
pub fn platform(name: &str) -> Option<&'static Platform> {
  PLATFORMS.iter().find(|platform| platform.name == name)
}

/// The platform owning `host`, after lower-casing and `www.` stripping.
#[must_use]
pub fn platform_for_host(host: &str) -> Option<&'static Platform> {
  let host = domain::normalize_host(host);

  PLATFORMS.iter().find(|platform| platform.owns_host(&host))
}

/// The registry, in display order.
#[must_use]
pub fn platforms() -> &'static [Platform] {
  PLATFORMS
}

/// The first platform whose name fragment occurs in `text`.
#[must_use]
pub fn resolve_fragment(text: &str) -> Option<&'static str> {
  fragment_platforms(text).next()
}
