//! Renders a localized button in its idle and pressed states and writes
//! both frames to `debug/button_preview.png`.

use std::sync::Arc;

use editor_widgets::{
    Button, Canvas, Drawable, FontSystem, FontSystemConfig, HorizontalAlign, PixelSize, Point,
    PointerButton, RenderStates, Size, Strings, TextStyle, TextTheme, Texture, VerticalAlign,
    color::{self, Color},
    int_rect,
};
use image::{ImageBuffer, Rgba};

const BUTTON_WIDTH: u32 = 120;
const BUTTON_HEIGHT: u32 = 32;

/// Two-frame sprite sheet: the idle frame on the left, the pressed one on the right.
fn sprite_sheet() -> Texture {
    let idle = Color::new(70, 80, 100, 255);
    let pressed = Color::new(40, 50, 70, 255);
    let border = Color::new(20, 20, 30, 255);

    let mut rgba = Vec::with_capacity((BUTTON_WIDTH * 2 * BUTTON_HEIGHT * 4) as usize);
    for y in 0..BUTTON_HEIGHT {
        for x in 0..BUTTON_WIDTH * 2 {
            let local_x = x % BUTTON_WIDTH;
            let edge = local_x == 0
                || local_x == BUTTON_WIDTH - 1
                || y == 0
                || y == BUTTON_HEIGHT - 1;
            let c = match (edge, x < BUTTON_WIDTH) {
                (true, _) => border,
                (false, true) => idle,
                (false, false) => pressed,
            };
            rgba.extend_from_slice(&[c.red, c.green, c.blue, c.alpha]);
        }
    }

    Texture::from_rgba(PixelSize::new(BUTTON_WIDTH * 2, BUTTON_HEIGHT), &rgba)
        .expect("sprite sheet buffer matches its size")
}

fn main() {
    let fonts = FontSystem::shared(FontSystemConfig::default());
    fonts.load_system_fonts();
    let font = fonts.default_font();
    if font.is_none() {
        println!("No system fonts found; the label will be empty.");
    }

    let style = TextStyle::new(font)
        .with_character_size(16)
        .with_fill_color(color::WHITE)
        .with_outline(color::BLACK, 1.0)
        .with_alignment(HorizontalAlign::Center, VerticalAlign::Middle)
        .shared();
    let strings: Strings = [("save", "Save level")].into_iter().collect();

    let mut button = Button::new(
        Point::new(10.0, 10.0),
        Size::new(BUTTON_WIDTH as f32, BUTTON_HEIGHT as f32),
        &sprite_sheet(),
        int_rect(0, 0, BUTTON_WIDTH as i32, BUTTON_HEIGHT as i32),
        int_rect(BUTTON_WIDTH as i32, 0, BUTTON_WIDTH as i32, BUTTON_HEIGHT as i32),
        TextTheme::uniform(style),
        Some(Arc::new(strings)),
        "save",
    )
    .with_on_released(|button| println!("released: {}", button.label().string()));

    let frame_height = BUTTON_HEIGHT + 20;
    let mut canvas = Canvas::new(PixelSize::new(BUTTON_WIDTH + 20, frame_height * 2));
    canvas.clear(Color::new(200, 200, 200, 255));

    button.draw(&mut canvas, &RenderStates::default());

    let inside = Point::new(20.0, 20.0);
    button.on_entered(inside);
    button.on_clicked(PointerButton::Left, inside);
    button.transformable_mut().set_position(Point::new(10.0, 10.0 + frame_height as f32));
    button.draw(&mut canvas, &RenderStates::default());
    button.on_released_control(PointerButton::Left, inside);

    std::fs::create_dir_all("debug").expect("failed to create debug directory");

    let size = canvas.size();
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(size.width, size.height, canvas.to_rgba8())
            .expect("canvas dimensions must match pixel buffer length");
    image
        .save("debug/button_preview.png")
        .expect("failed to save debug image");

    println!("Saved debug image to debug/button_preview.png");
}
