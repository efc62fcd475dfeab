//! Editor session: the buffer, its preview and change notification.

use std::fmt;

use folio_content::{ContentError, ContentService, ImageUpload, UploadedImage};
use folio_renderer::directive::{Align, DirectiveFeatures, ImageDirective};
use folio_renderer::{PreviewRenderer, RenderResult};

use crate::error::EditorError;
use crate::operation::Operation;
use crate::selection::{SelectionRange, TextBuffer};
use crate::transform;

/// Callback invoked after every change with the new buffer and preview.
pub type ChangeCallback = Box<dyn FnMut(&TextBuffer, &RenderResult)>;

/// Image insertion waiting for the content service.
///
/// Holds the dialog values only. The insertion position is decided when the
/// request is resolved, so edits made while the upload is in flight are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    alt: String,
    scale: i64,
    caption: String,
    align: Align,
}

impl ImageRequest {
    /// Build a request from raw dialog values.
    #[must_use]
    pub fn new(alt: &str, scale: i64, caption: &str, align: Align) -> Self {
        Self {
            alt: alt.to_owned(),
            scale,
            caption: caption.to_owned(),
            align,
        }
    }

    /// Directive to insert. Blank alt text takes the placeholder from
    /// `features`.
    #[must_use]
    pub fn directive(&self, features: &DirectiveFeatures) -> ImageDirective {
        ImageDirective::new_with(
            &self.alt,
            self.scale,
            &self.caption,
            self.align,
            &features.placeholder_alt,
        )
    }
}

/// A markdown editing session.
///
/// Every transform, raw edit, selection change and resolved image replaces
/// the buffer, re-renders the preview and notifies the change callback. Each
/// method takes `&mut self`, so two edits never interleave.
pub struct EditorSession {
    buffer: TextBuffer,
    renderer: PreviewRenderer,
    preview: RenderResult,
    on_change: Option<ChangeCallback>,
}

impl EditorSession {
    /// Create a session and render the initial preview.
    #[must_use]
    pub fn new(buffer: TextBuffer, renderer: PreviewRenderer) -> Self {
        let preview = renderer.render(buffer.text());
        Self {
            buffer,
            renderer,
            preview,
            on_change: None,
        }
    }

    /// Register the change callback.
    #[must_use]
    pub fn with_on_change(
        mut self,
        on_change: impl FnMut(&TextBuffer, &RenderResult) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Preview of the current buffer.
    #[must_use]
    pub fn preview(&self) -> &RenderResult {
        &self.preview
    }

    /// Apply a toolbar operation at the current selection.
    pub fn apply(&mut self, operation: &Operation) {
        let next = transform::apply(&self.buffer, operation);
        tracing::debug!(
            operation = operation.name(),
            start = next.selection().start(),
            end = next.selection().end(),
            "Applied operation"
        );
        self.commit(next);
    }

    /// Apply a toolbar action by name.
    pub fn run_action(&mut self, name: &str, level: Option<u8>) -> Result<(), EditorError> {
        let operation = Operation::from_name(name, level)?;
        self.apply(&operation);
        Ok(())
    }

    /// Replace the whole text, as after raw typing.
    pub fn replace_text(&mut self, text: &str, selection: impl Into<SelectionRange>) {
        self.commit(TextBuffer::new(text).with_selection(selection));
    }

    /// Move the selection without changing the text.
    pub fn select(&mut self, selection: impl Into<SelectionRange>) {
        self.buffer = self.buffer.clone().with_selection(selection);
        self.notify();
    }

    /// Insert an image from the gallery at the current selection.
    pub fn insert_image_url(&mut self, request: &ImageRequest, url: &str) {
        self.apply(&Operation::Image {
            directive: request.directive(self.renderer.features()),
            url: url.to_owned(),
        });
    }

    /// Apply the outcome of an upload started for `request`.
    ///
    /// The image lands at the selection current now, not the one from when
    /// the upload began. On failure the buffer is left untouched.
    pub fn resolve_image(
        &mut self,
        request: &ImageRequest,
        outcome: Result<UploadedImage, ContentError>,
    ) -> Result<(), EditorError> {
        match outcome {
            Ok(image) => {
                tracing::info!(url = %image.url, "Inserting uploaded image");
                self.insert_image_url(request, &image.url);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Image upload failed");
                Err(err.into())
            }
        }
    }

    /// Upload through `service` and insert the result.
    pub fn upload_image(
        &mut self,
        service: &dyn ContentService,
        upload: &ImageUpload,
        request: &ImageRequest,
    ) -> Result<(), EditorError> {
        let outcome = service.upload_image(upload);
        self.resolve_image(request, outcome)
    }

    fn commit(&mut self, buffer: TextBuffer) {
        self.preview = self.renderer.render(buffer.text());
        self.buffer = buffer;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.buffer, &self.preview);
        }
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("buffer", &self.buffer)
            .field("renderer", &self.renderer)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}
