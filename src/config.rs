//! Viewer options read from the page URL.
//!
//! Supported query parameters:
//! - `seed=<u64>` fixes the member jitter so a layout can be reproduced
//! - `theme=<name>` selects a [`Theme`] by name
//!
//! Malformed values are logged and ignored.

use log::warn;

use crate::components::force_graph::Theme;

#[derive(Clone, Debug, Default)]
/// Options that tune a single page view.
pub struct ViewerOptions {
	/// Jitter seed; a fresh one is drawn when unset.
	pub seed: Option<u64>,
	/// Visual theme.
	pub theme: Theme,
}

impl ViewerOptions {
	/// Parses options from `(key, value)` query pairs.
	pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		let mut options = Self::default();
		for (key, value) in pairs {
			match key {
				"seed" => match value.parse() {
					Ok(seed) => options.seed = Some(seed),
					Err(e) => warn!("funding-graph: ignoring seed `{}`: {}", value, e),
				},
				"theme" => match Theme::by_name(value) {
					Some(theme) => options.theme = theme,
					None => warn!("funding-graph: unknown theme `{}`", value),
				},
				_ => {}
			}
		}
		options
	}

	/// Options from the current page's query string.
	pub fn from_location() -> Self {
		let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
			return Self::default();
		};
		let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
			return Self::default();
		};
		let seed = params.get("seed");
		let theme = params.get("theme");
		Self::from_pairs(
			[("seed", seed.as_deref()), ("theme", theme.as_deref())]
				.into_iter()
				.filter_map(|(k, v)| Some((k, v?))),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = ViewerOptions::from_pairs(std::iter::empty());
		assert_eq!(options.seed, None);
		assert_eq!(options.theme.name, "default");
	}

	#[test]
	fn test_seed_and_theme() {
		let options = ViewerOptions::from_pairs([("seed", "1234"), ("theme", "midnight")]);
		assert_eq!(options.seed, Some(1234));
		assert_eq!(options.theme.name, "midnight");
	}

	#[test]
	fn test_bad_values_fall_back() {
		let options =
			ViewerOptions::from_pairs([("seed", "-3"), ("theme", "neon"), ("other", "x")]);
		assert_eq!(options.seed, None);
		assert_eq!(options.theme.name, "default");
	}
}
