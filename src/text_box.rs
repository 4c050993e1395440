use crate::error::LayoutError;
use crate::layout::{layout_text, LayoutResult, TextRun};
use crate::measure::Measurer;
use crate::options::{LayoutOptions, OptionsPatch};
use crate::render::Renderer;
use crate::units::Px;

/// A text box that keeps its latest layout and rendered surface around.
///
/// Every [`set`](TextBox::set) or [`update`](TextBox::update) lays the text out from
/// scratch, hands the previous surface back to the renderer for disposal, and only
/// then renders the new one.
pub struct TextBox<M: Measurer, R: Renderer> {
    measurer: M,
    renderer: R,
    run: TextRun,
    layout: LayoutResult,
    surface: Option<R::Surface>,
}

impl<M: Measurer, R: Renderer> TextBox<M, R> {
    pub fn new<T: Into<String>, F: Into<String>>(
        measurer: M,
        mut renderer: R,
        text: T,
        family: F,
        size: Px,
        options: LayoutOptions,
    ) -> Result<TextBox<M, R>, LayoutError> {
        let run = TextRun::new(text, family, size, options)?;
        let layout = layout_text(&measurer, &run)?;
        let surface = renderer.render(&layout)?;

        Ok(TextBox {
            measurer,
            renderer,
            run,
            layout,
            surface: Some(surface),
        })
    }

    /// Replace the text, font and options entirely
    pub fn set<T: Into<String>, F: Into<String>>(
        &mut self,
        text: T,
        family: F,
        size: Px,
        options: LayoutOptions,
    ) -> Result<(), LayoutError> {
        let run = TextRun::new(text, family, size, options)?;
        self.apply(run)
    }

    /// Replace the text, keeping the current font unless given and merging `patch`
    /// into the current options
    pub fn update<T: Into<String>>(
        &mut self,
        text: T,
        family: Option<&str>,
        size: Option<Px>,
        patch: &OptionsPatch,
    ) -> Result<(), LayoutError> {
        let run = self.run.update(text, family, size, patch)?;
        self.apply(run)
    }

    fn apply(&mut self, run: TextRun) -> Result<(), LayoutError> {
        let layout = layout_text(&self.measurer, &run)?;
        self.run = run;
        self.layout = layout;

        if let Some(old) = self.surface.take() {
            self.renderer.dispose(old);
        }
        self.surface = Some(self.renderer.render(&self.layout)?);
        Ok(())
    }

    pub fn run(&self) -> &TextRun {
        &self.run
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// The current surface. `None` if rendering the latest layout failed or the box has
    /// been disposed
    pub fn surface(&self) -> Option<&R::Surface> {
        self.surface.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// See [`LayoutResult::anchor_offset`]
    pub fn anchor_offset(&self) -> (Px, Px) {
        self.layout.anchor_offset()
    }

    /// Release the current surface. The layout is kept
    pub fn dispose(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.renderer.dispose(surface);
        }
    }
}

impl<M: Measurer, R: Renderer> Drop for TextBox<M, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;
    use crate::options::Overflow;

    /// Records the order surfaces are created and disposed in
    #[derive(Default)]
    struct RecordingRenderer {
        next: usize,
        events: Vec<String>,
        fail: bool,
    }

    #[derive(thiserror::Error, Debug)]
    #[error("refused")]
    struct Refused;

    impl Renderer for RecordingRenderer {
        type Surface = usize;

        fn render(&mut self, layout: &LayoutResult) -> Result<usize, LayoutError> {
            if self.fail {
                return Err(LayoutError::Render(Box::new(Refused)));
            }
            self.next += 1;
            self.events
                .push(format!("render {} {}x{}", self.next, layout.width, layout.height));
            Ok(self.next)
        }

        fn dispose(&mut self, surface: usize) {
            self.events.push(format!("dispose {surface}"));
        }
    }

    fn text_box(text: &str) -> TextBox<MonospaceMeasurer, RecordingRenderer> {
        TextBox::new(
            MonospaceMeasurer::with_advance(1.0),
            RecordingRenderer::default(),
            text,
            "mono",
            Px(10.0),
            LayoutOptions::default(),
        )
        .expect("can create text box")
    }

    #[test]
    fn old_surface_is_disposed_before_the_new_one_is_rendered() {
        let mut tb = text_box("ab");
        tb.set("abcd", "mono", Px(10.0), LayoutOptions::default())
            .unwrap();
        assert_eq!(
            tb.renderer().events,
            vec!["render 1 20x10", "dispose 1", "render 2 40x10"]
        );
        assert_eq!(tb.surface(), Some(&2));
    }

    #[test]
    fn update_keeps_font_and_merges_options() {
        let mut tb = text_box("ab");
        let patch = OptionsPatch {
            width: Some(Px(100.0)),
            overflow: Some(Overflow::Limit),
            ..Default::default()
        };
        tb.update("abc", None, Some(Px(20.0)), &patch).unwrap();

        assert_eq!(tb.run().family(), "mono");
        assert_eq!(tb.run().size(), Px(20.0));
        assert_eq!(tb.layout().width, 100);
        assert_eq!(tb.layout().height, 20);
        assert_eq!(tb.layout().lines[0].text, "abc");
    }

    #[test]
    fn failed_layout_keeps_the_previous_state() {
        let mut tb = text_box("ab");
        let result = tb.set("abcd", "mono", Px(-1.0), LayoutOptions::default());
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
        assert_eq!(tb.run().text(), "ab");
        assert_eq!(tb.surface(), Some(&1));
    }

    #[test]
    fn failed_render_leaves_no_surface() {
        let mut tb = text_box("ab");
        tb.renderer.fail = true;
        let result = tb.set("abcd", "mono", Px(10.0), LayoutOptions::default());
        assert!(matches!(result, Err(LayoutError::Render(_))));
        assert_eq!(tb.surface(), None);
        assert_eq!(tb.layout().width, 40);
    }

    #[test]
    fn dispose_releases_the_surface() {
        let mut tb = text_box("ab");
        tb.dispose();
        assert_eq!(tb.surface(), None);
        assert_eq!(tb.renderer().events, vec!["render 1 20x10", "dispose 1"]);
    }
}
