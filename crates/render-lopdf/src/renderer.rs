use crate::helpers::{font_resource_name, render_page_content};
use freightdoc_layout::{FontFace, LaidOutPage};
use freightdoc_render_core::utils::{pdf_date, to_win_ansi};
use freightdoc_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use freightdoc_types::Size;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Write;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then writes it to the output stream.
pub struct LopdfRenderer<W: Write> {
    document: Document,
    writer: Option<W>,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_size: Size,
}

impl<W: Write> LopdfRenderer<W> {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            writer: None,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page_size: Size::default(),
        }
    }
}

impl<W: Write> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

fn literal(text: &str) -> Object {
    Object::String(to_win_ansi(text), StringFormat::Literal)
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(
        &mut self,
        writer: W,
        info: &DocumentInfo,
        page_size: Size,
    ) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::Lifecycle("document already started"));
        }
        self.writer = Some(writer);
        self.page_size = page_size;

        let mut font_dict = Dictionary::new();
        for face in [FontFace::Regular, FontFace::Bold] {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font_resource_name(face), font_id);
        }
        self.document.objects.insert(
            self.resources_id,
            Object::Dictionary(dictionary! { "Font" => font_dict }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let info_id = self.document.add_object(dictionary! {
            "Title" => literal(&info.title),
            "Producer" => literal(&info.producer),
            "CreationDate" => literal(&pdf_date(&info.created_at)),
        });
        self.document.trailer.set("Info", info_id);
        Ok(())
    }

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Lifecycle("page rendered before begin_document"));
        }
        let Size { width, height } = self.page_size;
        let content = render_page_content(&page.elements, height);
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        log::trace!("Rendered page {} with {} element(s)", page.index + 1, page.elements.len());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Lifecycle("finish called before begin_document"))?;

        let kids: Vec<Object> = renderer.page_ids.iter().map(|id| Object::from(*id)).collect();
        let count = renderer.page_ids.len() as i64;
        renderer.document.objects.insert(
            renderer.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        renderer.document.save_to(&mut writer)?;
        Ok(writer)
    }
}
