//! Browser automation module
//!
//! High-level browser control through ChromiumOxide: lifecycle management,
//! navigation with retries, and the reel-target URL contract.

pub mod controller;
pub mod navigation;

pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use navigation::{NavigationOptions, NavigationResult, PageNavigator, ReelUrl, WaitUntil};
