//! # frontpage
//!
//! A terminal viewer for the top news headlines of a country.
//!
//! ## Architecture
//!
//! ```text
//! NewsClient → HeadlineFeedController → FeedState → UI
//! ```
//!
//! - [`client`]: HTTP client for the top-headlines endpoint
//! - [`controller`]: the fetch state machine that turns responses and
//!   failures into renderable state
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the current headlines
//! frontpage fetch
//!
//! # Launch the TUI
//! frontpage tui
//! ```
//!
//! The API key and country live in `~/.config/frontpage/config.toml`.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the configuration and the
/// news client together.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch` - Fetch once and print the headlines
/// - `tui` - Launch the TUI
pub mod cli;

/// The news-service client seam.
///
/// - [`NewsClient`](client::NewsClient): async trait for fetching top
///   headlines
/// - [`HttpNewsClient`](client::http_client::HttpNewsClient):
///   reqwest-based implementation
pub mod client;

/// Configuration management.
///
/// Loads from `~/.config/frontpage/config.toml`: feed settings
/// (country, API key, endpoint, timeout), colors, keybindings.
pub mod config;

/// The headline-fetch state machine.
///
/// [`HeadlineFeedController`](controller::HeadlineFeedController) owns
/// the renderable [`FeedState`](domain::FeedState), maps fetch
/// outcomes (populated, domain error, transport error) into it, and
/// exposes the refresh token and the focus cursor.
pub mod controller;

/// Core domain models.
///
/// - [`Article`](domain::Article) / [`FeedResponse`](domain::FeedResponse):
///   wire types of the headlines service
/// - [`FeedState`](domain::FeedState): the controller-owned UI state
pub mod domain;

/// Terminal user interface.
///
/// A single scrollable list of headline cards with a focus highlight
/// and a status bar. Keybindings: j/k navigate, n/p page, R refreshes,
/// o opens the focused article in a browser, q quits.
pub mod tui;
