// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a tile menu through a full selection cycle on the software
//! compositor, printing every motion and viewport shift.

use kurbo::Rect;
use trellis_menu::softcomp::SoftCompositor;
use trellis_menu::{Compositor, MenuButton, MenuCallbacks, TileMenu};

fn main() {
    let mut platform = SoftCompositor::new();
    let frame = Rect::new(0.0, 0.0, 144.0, 144.0);
    let window = platform.new_window(frame);

    // Eight tiles, two per row, three rows visible: the fourth row starts
    // below the fold.
    let mut menu: TileMenu<SoftCompositor, u32> =
        TileMenu::create(&mut platform, frame, Some(window), 8, 3, 2)
            .expect("counts and window are valid");
    menu.set_callbacks(MenuCallbacks {
        click_config: None,
        content_changed: Some(Box::new(|_, shifts: &mut u32| *shifts += 1)),
    });
    menu.draw(&mut platform);

    println!(
        "drawn: {} tiles, content {:?}, selected {:?}",
        menu.tile_count(),
        menu.bounds(),
        menu.selected()
    );

    // A full forward cycle plus one: the selection wraps back past the first
    // tile and the viewport follows it both ways.
    for press in 1..=9 {
        let response = menu.handle_click(&mut platform, MenuButton::Down);
        println!(
            "press {press}: {response:?}, content offset {:?}",
            platform.content_offset(menu.layer())
        );
    }

    println!(
        "viewport shifted {} times across {} animation requests",
        menu.context(),
        platform.animations().len()
    );

    menu.destroy(&mut platform);
    println!(
        "teardown: created {} layers, destroyed {}",
        platform.layers_created(),
        platform.layers_destroyed()
    );
}
