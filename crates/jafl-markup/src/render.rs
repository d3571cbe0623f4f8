use std::convert::Infallible;

use jafl_dom::Element;

/// Turns a closed element into its HTML fragment.
///
/// Called exactly once per element, in post-order: by the time an element is
/// rendered, every child has already been rendered into its `content`.
pub trait ElementRenderer {
    /// Error raised by a rendering rule.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render one element.
    ///
    /// # Errors
    ///
    /// Implementations fail when a rule needs data it cannot find.
    fn render(&self, element: &Element) -> Result<String, Self::Error>;
}

/// Renderer that serializes every element back to markup.
///
/// Handy for inspecting the parse without any transformation rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl ElementRenderer for Verbatim {
    type Error = Infallible;

    fn render(&self, element: &Element) -> Result<String, Self::Error> {
        Ok(element.to_string())
    }
}

impl<R: ElementRenderer + ?Sized> ElementRenderer for &R {
    type Error = R::Error;

    fn render(&self, element: &Element) -> Result<String, Self::Error> {
        (**self).render(element)
    }
}
