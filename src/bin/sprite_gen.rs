use image::{ImageBuffer, Rgba, RgbaImage};

const SPRITE_SIZE: u32 = 35;

#[derive(Clone, Copy)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

const SKIN: Color = Color::rgba(236, 188, 150, 255);
const HAIR: Color = Color::rgba(74, 48, 32, 255);
const TUNIC: Color = Color::rgba(64, 108, 182, 255);
const TROUSERS: Color = Color::rgba(52, 52, 74, 255);
const BOOTS: Color = Color::rgba(46, 34, 26, 255);
const EYE: Color = Color::rgba(24, 20, 20, 255);

fn set_px(img: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (w, h) = img.dimensions();
    if x as u32 >= w || y as u32 >= h {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, color.a]));
}

fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            set_px(img, x, y, color);
        }
    }
}

// 0 下 1 左 2 右 3 上，和游戏里的贴图索引一致
fn draw_character(img: &mut RgbaImage, facing: usize, walking: bool) {
    // 头与头发
    fill_rect(img, 13, 4, 21, 12, SKIN);
    fill_rect(img, 13, 3, 21, 6, HAIR);
    match facing {
        0 => {
            set_px(img, 15, 9, EYE);
            set_px(img, 19, 9, EYE);
        }
        1 => {
            fill_rect(img, 18, 3, 21, 12, HAIR);
            set_px(img, 14, 9, EYE);
        }
        2 => {
            fill_rect(img, 13, 3, 16, 12, HAIR);
            set_px(img, 20, 9, EYE);
        }
        _ => {
            // 背面只有头发
            fill_rect(img, 13, 3, 21, 12, HAIR);
        }
    }

    // 上衣与手臂
    fill_rect(img, 12, 13, 22, 23, TUNIC);
    fill_rect(img, 10, 14, 11, 20, SKIN);
    fill_rect(img, 23, 14, 24, 20, SKIN);

    // 腿部：走路帧一条腿抬起、一条腿落后
    if walking {
        fill_rect(img, 13, 24, 15, 28, TROUSERS);
        fill_rect(img, 13, 29, 15, 30, BOOTS);
        fill_rect(img, 19, 26, 21, 31, TROUSERS);
        fill_rect(img, 19, 32, 21, 33, BOOTS);
    } else {
        fill_rect(img, 13, 24, 15, 31, TROUSERS);
        fill_rect(img, 13, 32, 15, 33, BOOTS);
        fill_rect(img, 19, 24, 21, 31, TROUSERS);
        fill_rect(img, 19, 32, 21, 33, BOOTS);
    }
}

fn main() -> Result<(), String> {
    let directions = ["down", "left", "right", "up"];

    for (facing, name) in directions.iter().enumerate() {
        for walking in [false, true] {
            let mut img: RgbaImage = ImageBuffer::new(SPRITE_SIZE, SPRITE_SIZE);
            draw_character(&mut img, facing, walking);

            let path = if walking {
                format!("assets/player_{name}_walk.png")
            } else {
                format!("assets/player_{name}.png")
            };
            img.save(&path).map_err(|e| format!("save failed: {e}"))?;
            println!("wrote {path} ({SPRITE_SIZE}x{SPRITE_SIZE})");
        }
    }

    Ok(())
}
