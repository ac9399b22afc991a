// Host-side tests for the RGBA image buffer and canvas resizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}
mod color {
    include!("../src/core/color.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod image {
    include!("../src/core/image.rs");
}
mod resize {
    include!("../src/core/resize.rs");
}

use color::Color;
use error::Error;
use geometry::{Point, Segment};
use image::*;
use resize::*;

const RED: Color = Color::new(255, 0, 0, 255);
const BLUE: Color = Color::new(0, 0, 255, 255);

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn blank_image_is_white() {
    let img = Image::blank(2, 3);
    assert_eq!(img.data().len(), 2 * 3 * CHANNELS);
    assert_eq!(img.pixel(p(1, 2)), Some(Color::white()));
    assert_eq!(img.pixel(p(2, 0)), None);
    assert_eq!(img.pixel(p(0, -1)), None);
}

#[test]
fn from_rgba_drops_partial_rows() {
    let img = Image::from_rgba(vec![0; 10], 2);
    assert_eq!((img.width(), img.height()), (2, 1));
    assert_eq!(img.data().len(), 8);

    let empty = Image::from_rgba(vec![1, 2, 3, 4], 0);
    assert_eq!(empty.height(), 0);
}

#[test]
fn set_pixel_ignores_points_off_image() {
    let mut img = Image::blank(2, 2);
    let before = img.clone();
    img.set_pixel(p(2, 1), &RED);
    img.set_pixel(p(-1, 0), &RED);
    assert_eq!(img, before);
}

#[test]
fn draw_segment_paints_endpoints() {
    let mut img = Image::blank(4, 2);
    img.draw_segment(&Segment::new(p(0, 1), p(3, 1)), &RED);
    for x in 0..4 {
        assert_eq!(img.pixel(p(x, 1)), Some(RED));
        assert_eq!(img.pixel(p(x, 0)), Some(Color::white()));
    }
}

#[test]
fn resizer_ids_name_edges() {
    assert_eq!(
        ResizeEdges::from_id("resizer-south-east"),
        Ok(ResizeEdges {
            west: false,
            east: true,
            south: true
        })
    );
    assert!(ResizeEdges::from_id("resizer-west").unwrap().west);
    assert_eq!(
        ResizeEdges::from_id("handle"),
        Err(Error::UnknownResizer("handle".into()))
    );
}

#[test]
fn east_growth_keeps_top_left_and_fills_white() {
    let mut img = Image::blank(2, 2);
    img.set_pixel(p(1, 1), &RED);
    let edges = ResizeEdges::from_id("resizer-south-east").unwrap();
    let out = resize_image(&img, edges, 4, 3);
    assert_eq!((out.width(), out.height()), (4, 3));
    assert_eq!(out.pixel(p(1, 1)), Some(RED));
    assert_eq!(out.pixel(p(3, 0)), Some(Color::white()));
    assert_eq!(out.pixel(p(3, 2)), Some(Color::white()));
}

#[test]
fn west_growth_keeps_right_edge() {
    let mut img = Image::blank(2, 2);
    img.set_pixel(p(0, 0), &RED);
    let edges = ResizeEdges::from_id("resizer-west").unwrap();
    let out = resize_image(&img, edges, 5, 2);
    assert_eq!(out.pixel(p(3, 0)), Some(RED));
    assert_eq!(out.pixel(p(0, 0)), Some(Color::white()));
}

#[test]
fn west_shrink_crops_left() {
    let mut img = Image::blank(4, 1);
    img.set_pixel(p(0, 0), &BLUE);
    img.set_pixel(p(3, 0), &RED);
    let edges = ResizeEdges::from_id("resizer-west").unwrap();
    let out = resize_image(&img, edges, 2, 1);
    assert_eq!(out.pixel(p(1, 0)), Some(RED));
    assert_eq!(out.pixel(p(0, 0)), Some(Color::white()));
}

#[test]
fn east_shrink_crops_right() {
    let mut img = Image::blank(4, 1);
    img.set_pixel(p(0, 0), &RED);
    img.set_pixel(p(3, 0), &BLUE);
    let edges = ResizeEdges::from_id("resizer-east").unwrap();
    let out = resize_image(&img, edges, 2, 1);
    assert_eq!(out.pixel(p(0, 0)), Some(RED));
    assert!(!out.data().chunks(CHANNELS).any(|px| px == [0, 0, 255, 255]));
}

#[test]
fn south_shrink_crops_bottom() {
    let mut img = Image::blank(2, 3);
    img.set_pixel(p(0, 2), &RED);
    let edges = ResizeEdges::from_id("resizer-south").unwrap();
    let out = resize_image(&img, edges, 2, 2);
    assert_eq!(out.height(), 2);
    assert!(out.data().chunks(CHANNELS).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn resize_to_nothing_is_empty() {
    let img = Image::blank(3, 3);
    let out = resize_image(&img, ResizeEdges::from_id("resizer-east").unwrap(), 0, 0);
    assert!(out.data().is_empty());
}
