use {
  ego_tree::NodeRef,
  pretty_assertions::assert_eq,
  scraper::{Html, Node, Selector},
  social_cleanse::{
    Activation, AllowList, BlockedDomains, DisabledReason, Engine,
    JsonFileStore, MemoryStore, Page, Settings,
  },
  std::{fs, path::PathBuf},
  url::Url,
};

macro_rules! fixture {
  ($name:expr) => {
    paste::paste! {
      #[test]
      fn [<fixture_ $name>]() {
        TestFixture::load($name).run();
      }
    }
  };
}

macro_rules! host_case {
  ($name:ident, $url:expr, $blocked:expr) => {
    paste::paste! {
      #[test]
      fn [<host_ $name>]() {
        let blocked = BlockedDomains::from_allow_list(&AllowList::default());
        let base = Url::parse("https://example.org/page").unwrap();

        assert_eq!(blocked.blocks_url(Some($url), &base), $blocked, "{}", $url);
      }
    }
  };
}

struct TestFixture {
  expected_html: String,
  path: PathBuf,
  source_html: String,
  url: String,
}

impl TestFixture {
  fn load(name: &str) -> Self {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
      .join("tests/fixtures")
      .join(name);

    let source_html = fs::read_to_string(path.join("source.html"))
      .expect("Failed to read source.html");

    let expected_html = fs::read_to_string(path.join("expected.html"))
      .expect("Failed to read expected.html");

    let url = fs::read_to_string(path.join("url.txt"))
      .expect("Failed to read url.txt")
      .trim()
      .to_string();

    Self {
      expected_html,
      path,
      source_html,
      url,
    }
  }

  fn run(&self) {
    let mut page = Page::parse(&self.source_html, &self.url)
      .expect("Failed to parse fixture page");

    let store = JsonFileStore::new(self.path.join("settings.json"));

    Engine::start(&mut page, &store);

    assert_eq!(
      outline(&Html::parse_document(&page.html())),
      outline(&Html::parse_document(&self.expected_html)),
      "cleansed page differs from expected.html",
    );
  }
}

/// Indented outline of the element tree under `<body>`, one line per element
/// or non-blank text run, with attributes sorted and whitespace collapsed.
fn outline(html: &Html) -> String {
  fn walk(node: NodeRef<Node>, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);

    match node.value() {
      Node::Element(element) => {
        let mut attrs = element
          .attrs()
          .map(|(name, value)| format!(" {name}={value:?}"))
          .collect::<Vec<_>>();

        attrs.sort();

        lines.push(format!("{indent}<{}{}>", element.name(), attrs.concat()));

        for child in node.children() {
          walk(child, depth + 1, lines);
        }
      }
      Node::Text(text) => {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if !text.is_empty() {
          lines.push(format!("{indent}{text}"));
        }
      }
      _ => {}
    }
  }

  let body = Selector::parse("body").unwrap();

  let mut lines = Vec::new();

  for element in html.select(&body) {
    walk(*element, 0, &mut lines);
  }

  lines.join("\n")
}

fn page(url: &str, body: &str) -> Page {
  Page::parse(&format!("<html><body>{body}</body></html>"), url).unwrap()
}

fn active(page: &mut Page, settings: Settings) -> Engine {
  Engine::activate(page, &settings)
    .engine()
    .expect("engine should be active")
}

fixture!("allow-youtube");
fixture!("global-disabled");
fixture!("share-widgets");
fixture!("site-disabled");

host_case!(exact, "https://twitter.com/a", true);
host_case!(subdomain, "https://mobile.twitter.com/a", true);
host_case!(deep_subdomain, "https://a.b.c.reddit.com", true);
host_case!(www_prefix, "https://www.instagram.com/x", true);
host_case!(uppercase, "HTTPS://WWW.TIKTOK.COM/@x", true);
host_case!(short_domain, "https://t.me/channel", true);
host_case!(protocol_relative, "//bsky.app/profile/x", true);
host_case!(relative_path, "/twitter.com", false);
host_case!(not_a_domain, "https://notadomain/", false);
host_case!(domain_as_prefix_label, "https://twitter.com.evil.com/", false);
host_case!(domain_as_label_suffix, "https://nottwitter.com/", false);
host_case!(unrelated, "https://www.rust-lang.org/", false);
host_case!(malformed, "http://exa mple.com", false);
host_case!(hostless, "mailto:team@facebook.com", false);

const EVERY_HEURISTIC_ON_YOUTUBE: &str = r#"
  <p>Link <a href="https://www.youtube.com/@channel">channel</a> here</p>
  <p>Icon <i class="fab fa-youtube"></i> here</p>
  <p>Label <svg aria-label="YouTube"></svg> here</p>
  <p>Image <img src="/logos/youtube.png" alt="logo"> here</p>
  <section><div class="share">Watch on YouTube</div><p>more</p></section>
  <p>Embed <iframe src="https://www.youtube.com/embed/v"></iframe> here</p>
"#;

#[test]
fn allowed_platform_survives_every_heuristic() {
  let mut page = page("https://example.com/", EVERY_HEURISTIC_ON_YOUTUBE);

  let engine = active(
    &mut page,
    Settings::builder().allowed_platforms(["YouTube"]).build(),
  );

  assert!(engine.initial_report().is_empty());
  assert_eq!(page.count("a, i, svg, img, .share, iframe").unwrap(), 6);
}

#[test]
fn cleansed_platform_is_caught_by_every_heuristic() {
  let mut page = page("https://example.com/", EVERY_HEURISTIC_ON_YOUTUBE);

  let engine = active(&mut page, Settings::default());

  assert_eq!(engine.initial_report().len(), 6);
  assert_eq!(page.count("a, i, svg, img, .share, iframe").unwrap(), 0);
}

#[test]
fn allowed_attribution_beats_generic_detection_elsewhere() {
  let mut page = page(
    "https://example.com/",
    r#"<p><img class="youtube-icon social-icon" alt="Twitter"> x</p>"#,
  );

  active(
    &mut page,
    Settings::builder().allowed_platforms(["YouTube"]).build(),
  );

  assert_eq!(page.count("img").unwrap(), 1);
}

#[test]
fn second_scan_is_a_no_op() {
  let mut page = page(
    "https://example.com/",
    r#"
    <ul>
      <li><a href="https://facebook.com/x">Facebook</a></li>
      <li><a href="/about">About</a></li>
    </ul>
    <div><span class="social-icon"></span></div>
    <div class="share-bar">Follow on Twitch</div>
    "#,
  );

  let engine = active(&mut page, Settings::default());

  assert_eq!(engine.initial_report().len(), 3);

  let html = page.html();

  assert!(engine.scanner().scan(&mut page).is_empty());
  assert_eq!(page.html(), html);
}

#[test]
fn removal_ascends_to_lone_list_item() {
  let mut page = page(
    "https://example.com/",
    r#"<ul id="list"><li><a href="https://twitter.com/x">x</a></li></ul>"#,
  );

  active(&mut page, Settings::default());

  assert_eq!(page.count("#list").unwrap(), 1);
  assert_eq!(page.count("li").unwrap(), 0);
}

#[test]
fn removal_keeps_multi_child_div() {
  let mut page = page(
    "https://example.com/",
    r#"<div id="box"><a href="https://twitter.com/x">x</a><p>a</p><p>b</p></div>"#,
  );

  active(&mut page, Settings::default());

  assert_eq!(page.count("#box").unwrap(), 1);
  assert_eq!(page.count("#box > *").unwrap(), 2);
  assert_eq!(page.count("a").unwrap(), 0);
}

#[test]
fn inserted_social_link_is_removed_without_reload() {
  let mut page = page("https://example.com/", r#"<div id="feed"></div>"#);

  let engine = active(&mut page, Settings::default());

  page
    .append_html(
      "#feed",
      r#"<p>New post <a href="https://www.threads.net/@x">Threads</a></p>"#,
    )
    .unwrap();

  let report = engine.on_mutations(&mut page).expect("rescan expected");

  assert_eq!(report.len(), 1);
  assert_eq!(page.count("#feed p").unwrap(), 1);
  assert_eq!(page.count("a").unwrap(), 0);

  assert!(engine.on_mutations(&mut page).is_none());
}

#[test]
fn host_removals_do_not_trigger_rescan() {
  let mut page = page(
    "https://example.com/",
    r#"<p id="old">old</p><div id="feed"></div>"#,
  );

  let engine = active(&mut page, Settings::default());

  page.remove_matching("#old").unwrap();

  assert_eq!(page.pending_records().len(), 1);
  assert!(engine.on_mutations(&mut page).is_none());
}

#[test]
fn many_insertions_in_one_batch_scan_once() {
  let mut page = page("https://example.com/", r#"<ul id="feed"></ul>"#);

  let engine = active(&mut page, Settings::default());

  for handle in ["a", "b", "c"] {
    page
      .append_html(
        "#feed",
        &format!(r#"<li><a href="https://bsky.app/profile/{handle}">{handle}</a></li>"#),
      )
      .unwrap();
  }

  let report = engine.on_mutations(&mut page).expect("rescan expected");

  assert_eq!(report.len(), 3);
  assert_eq!(page.count("#feed li").unwrap(), 0);
}

#[test]
fn youtube_allowed_twitter_removed_end_to_end() {
  let mut page = page(
    "https://news.example.com/",
    r#"
    <p>Watch <span class="icon-youtube"></span> now</p>
    <div id="wrap"><a href="https://twitter.com/news">Twitter</a></div>
    "#,
  );

  let store = MemoryStore::from(serde_json::json!({
    "allowedPlatforms": ["YouTube"],
    "disabledSites": [],
    "globalEnabled": true,
  }));

  assert!(Engine::start(&mut page, &store).is_active());
  assert_eq!(page.count(".icon-youtube").unwrap(), 1);
  assert_eq!(page.count("#wrap").unwrap(), 0);
  assert_eq!(page.count("a").unwrap(), 0);
}

#[test]
fn globally_disabled_removes_nothing() {
  let mut page = page(
    "https://example.com/",
    r#"<a href="https://twitter.com/x">x</a><i class="fa-facebook"></i>"#,
  );

  let before = page.html();

  let store = MemoryStore::from(serde_json::json!({ "globalEnabled": false }));

  assert!(matches!(
    Engine::start(&mut page, &store),
    Activation::Disabled(DisabledReason::Global)
  ));
  assert_eq!(page.html(), before);
}

#[test]
fn disabled_site_matches_www_host() {
  let mut page = page(
    "https://www.example.com/",
    r#"<a href="https://twitter.com/x">x</a>"#,
  );

  let before = page.html();

  let store =
    MemoryStore::from(serde_json::json!({ "disabledSites": ["example.com"] }));

  assert!(!Engine::start(&mut page, &store).is_active());
  assert_eq!(page.html(), before);
}

#[test]
fn disabled_site_does_not_cover_other_hosts() {
  let mut page = page(
    "https://blog.example.com/",
    r#"<a href="https://twitter.com/x">x</a>"#,
  );

  let settings = Settings::builder().disabled_sites(["example.com"]).build();

  active(&mut page, settings);

  assert_eq!(page.count("a").unwrap(), 0);
}
