use anyhow::{anyhow, Result};
use raylib::prelude::*;

use crate::config::RenderConfig;
use crate::session::{Command, Session};

// Arrow keys move, Q/E rotate in xy, W/S rotate in yz
fn poll_command(rl: &RaylibHandle, config: &RenderConfig) -> Option<Command> {
    let step = config.move_step;
    let angle = config.rotate_step;
    let bindings = [
        (KeyboardKey::KEY_UP, Command::up(step)),
        (KeyboardKey::KEY_DOWN, Command::down(step)),
        (KeyboardKey::KEY_LEFT, Command::left(step)),
        (KeyboardKey::KEY_RIGHT, Command::right(step)),
        (KeyboardKey::KEY_E, Command::rotate_xy(angle)),
        (KeyboardKey::KEY_Q, Command::rotate_xy(-angle)),
        (KeyboardKey::KEY_W, Command::rotate_yz(angle)),
        (KeyboardKey::KEY_S, Command::rotate_yz(-angle)),
    ];
    bindings
        .into_iter()
        .find(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, command)| command)
}

fn frame_texture(rl: &mut RaylibHandle, thread: &RaylibThread, width: u32, height: u32) -> Result<Texture2D> {
    let image = Image::gen_image_color(width as i32, height as i32, Color::BLANK);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("raylib texture creation failed: {e:?}"))
}

/// Open a window and re-render the session after every key command or
/// window resize. The render surface always matches the window size.
pub fn run(config: &RenderConfig, mut session: Session) -> Result<()> {
    let (width, height) = (config.width, config.height);
    if width == 0 || height == 0 {
        return Err(anyhow!("cannot open a {width}x{height} window"));
    }

    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("trirender")
        .resizable()
        .build();
    rl.set_target_fps(60);

    let mut texture = frame_texture(&mut rl, &thread, width, height)?;
    let mut dirty = true;

    while !rl.window_should_close() {
        if rl.is_window_resized() {
            let (w, h) = (rl.get_screen_width().max(0) as u32, rl.get_screen_height().max(0) as u32);
            // Minimised windows report 0x0; keep the last frame
            if w > 0 && h > 0 {
                session.resize(w, h);
                texture = frame_texture(&mut rl, &thread, w, h)?;
                dirty = true;
            }
        }

        if let Some(command) = poll_command(&rl, config) {
            log::info!("{command:?}");
            session.apply(command);
            dirty = true;
        }

        // Only upload after a new frame was rendered
        if dirty {
            let _ = texture.update_texture(&session.frame().rgba);
            dirty = false;
        }

        let frame = session.frame();
        let (frame_width, frame_height) = (frame.width as f32, frame.height as f32);
        let state = *session.state();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        d.draw_texture_pro(
            &texture,
            Rectangle { x: 0.0, y: 0.0, width: frame_width, height: frame_height },
            Rectangle { x: 0.0, y: 0.0, width: frame_width, height: frame_height },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        d.draw_text(
            &format!(
                "move ({:.0}, {:.0}, {:.0})  rotate xy {:.2} yz {:.2}",
                state.translation.x, state.translation.y, state.translation.z, state.rotation.xy, state.rotation.yz
            ),
            10,
            10,
            10,
            Color::DARKGRAY,
        );
    }
    Ok(())
}
