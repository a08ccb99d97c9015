// User-facing pages: navigation, branding, the Demo result view and its HTML.
// Rendering is split from computation: handlers build a view model, templates render it.

pub mod branding;
pub mod handlers;
pub mod navigation;
pub mod templates;
pub mod view;
