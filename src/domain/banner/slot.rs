// SPDX-License-Identifier: MPL-2.0
//! Left/right content slots of a banner.

use super::hooks::{Hook, ImageLoaderFn};
use std::path::PathBuf;
use std::sync::Arc;

/// An image the presentation layer can decode on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image file on disk.
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG...).
    Bytes(Arc<[u8]>),
    /// Named image registered with the presentation layer.
    Named(String),
}

/// A remote image and the caller-supplied loader that fetches it.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    /// Image location, passed untouched to the loader.
    pub url: String,
    /// Loader invoked by the presentation layer.
    pub loader: Hook<ImageLoaderFn>,
}

/// Candidate contents of one slot.
///
/// Several candidates may be set at once; [`Slot::resolve`] picks one by
/// priority: custom view, then remote image, then literal image, then the
/// default icon.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    pub(crate) custom_view: Option<String>,
    pub(crate) remote: Option<RemoteImage>,
    pub(crate) image: Option<ImageSource>,
}

/// What a slot actually shows.
#[derive(Debug, Clone, Copy)]
pub enum SlotContent<'a> {
    /// Nothing.
    Empty,
    /// The kind's default icon.
    DefaultIcon,
    /// A custom view registered under this name.
    CustomView(&'a str),
    /// A remote image to fetch through its loader.
    Remote(&'a RemoteImage),
    /// A literal image.
    Image(&'a ImageSource),
}

impl Slot {
    /// Resolves the slot content by priority.
    ///
    /// `default_icon` decides what an unconfigured slot shows.
    #[must_use]
    pub fn resolve(&self, default_icon: bool) -> SlotContent<'_> {
        if let Some(name) = &self.custom_view {
            SlotContent::CustomView(name)
        } else if let Some(remote) = &self.remote {
            SlotContent::Remote(remote)
        } else if let Some(image) = &self.image {
            SlotContent::Image(image)
        } else if default_icon {
            SlotContent::DefaultIcon
        } else {
            SlotContent::Empty
        }
    }

    /// Returns whether no candidate is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.custom_view.is_none() && self.remote.is_none() && self.image.is_none()
    }
}
