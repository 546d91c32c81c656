//! Reference resolution entry point.
//!
//! A [`Resolver`] pairs the session's [`BuildContext`] with the revv
//! registry. Renderers create one per session and call it from any thread,
//! passing the output path of the page being rendered as `anchor`.
//!
//! | Method        | Module        | Revved | Absolute |
//! |---------------|---------------|--------|----------|
//! | `link`        | `link`        | no     | no       |
//! | `revv`        | `crate::revv` | prod   | no       |
//! | `remote_url`  | `remote`      | prod   | yes      |
//! | `page_url`    | `remote`      | never  | yes      |
//! | `proxied`     | `crate::image`| prod   | prod     |
//! | `lazyload`    | `crate::image`| prod   | prod     |
//! | `screenshot`  | `crate::image`| never  | yes      |

mod link;
mod remote;


use crate::config::BuildContext;
use crate::revv::RevvRegistry;

/// Session-wide resolver handle.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    ctx: &'a BuildContext,
    registry: &'a dyn RevvRegistry,
}

impl<'a> Resolver<'a> {
    pub fn new(ctx: &'a BuildContext, registry: &'a dyn RevvRegistry) -> Self {
        Self { ctx, registry }
    }

    #[inline]
    pub fn ctx(&self) -> &'a BuildContext {
        self.ctx
    }

    #[inline]
    pub(crate) fn registry(&self) -> &'a dyn RevvRegistry {
        self.registry
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("ctx", self.ctx)
            .finish_non_exhaustive()
    }
}
