//! Output backends for composed scenes.

use crate::error::RenderResult;
use crate::scene::Scene;

/// Something that can show or export a [`Scene`].
pub trait DisplayBackend {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Draw `scene`. Interactive backends block until the user is done.
    fn present(&mut self, scene: &Scene) -> RenderResult<()>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn present(&mut self, scene: &Scene) -> RenderResult<()> {
        (**self).present(scene)
    }
}
