use crate::core::{clip_segment, resize_image, Image, Point, Rect, ResizeEdges, Segment};
use crate::constants::CANVAS_ID;
use crate::dom::{self, js_err};
use anyhow::anyhow;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// The `#canvas` element together with the image it displays.
///
/// Drawing happens on `image`; nothing reaches the screen until `present`.
pub struct Surface {
    element: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
    image: Image,
}

impl Surface {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let element: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)?;
        let context = element
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let (width, height) = (element.width(), element.height());
        let image = if width == 0 || height == 0 {
            Image::blank(width, height)
        } else {
            let data = context
                .get_image_data(0.0, 0.0, width as f64, height as f64)
                .map_err(js_err)?;
            Image::from_rgba(data.data().0, width)
        };
        log::info!("[canvas] attached {}x{}", width, height);
        Ok(Self {
            element,
            context,
            image,
        })
    }

    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    #[inline]
    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    /// Pointer position in canvas pixels.
    pub fn point(&self, ev: &web::MouseEvent) -> Point {
        let rect = self.element.get_bounding_client_rect();
        Point::new(
            ev.client_x() - rect.left() as i32,
            ev.client_y() - rect.top() as i32,
        )
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.image.pixel(point).is_some()
    }

    #[inline]
    pub fn clip(&self, segment: Segment) -> Option<Segment> {
        clip_segment(segment, self.image.width(), self.image.height())
    }

    pub fn bounding_rect(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }

    pub fn present(&self) -> anyhow::Result<()> {
        self.present_image(&self.image)
    }

    /// Blit `image` without making it the surface's own image (line previews).
    pub fn present_image(&self, image: &Image) -> anyhow::Result<()> {
        let data = web::ImageData::new_with_u8_clamped_array(Clamped(image.data()), image.width())
            .map_err(js_err)?;
        self.context
            .put_image_data(&data, 0.0, 0.0)
            .map_err(js_err)
    }

    pub fn resize(&mut self, edges: ResizeEdges, width: u32, height: u32) -> anyhow::Result<()> {
        self.image = resize_image(&self.image, edges, width, height);
        self.element.set_width(width);
        self.element.set_height(height);
        self.present()
    }
}
