//! Board layout and drawing: shading, overlays, piece images and hit-testing.

use chess::{BoardSnapshot, PieceColor, PieceKind, Square, STANDARD_FEN};
use duochess::pieces::{ImageResolver, ManifestResolver, PieceImage, PieceSet};
use duochess::render::{render_board, render_presentation, Orientation, Shade};
use duochess::ui::theme::Theme;
use duochess::ui::widgets::{BoardGeometry, BoardWidget};
use duochess::BoardController;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn start_snapshot() -> BoardSnapshot {
    BoardSnapshot::from_fen(STANDARD_FEN).unwrap()
}

#[test]
fn test_shading_matches_board_colours() {
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &PieceSet::Letters,
        Orientation::WhiteBottom,
    );
    assert_eq!(view.squares.len(), 64);
    assert_eq!(view.get(sq("a1")).unwrap().shade, Shade::Dark);
    assert_eq!(view.get(sq("h1")).unwrap().shade, Shade::Light);
    assert_eq!(view.get(sq("d1")).unwrap().shade, Shade::Light);
    assert_eq!(view.get(sq("e1")).unwrap().shade, Shade::Dark);
}

#[test]
fn test_selection_highlight_and_last_move_flags() {
    let highlights = [sq("e3"), sq("e4")];
    let view = render_board(
        &start_snapshot(),
        Some(sq("e2")),
        &highlights,
        Some((sq("g8"), sq("f6"))),
        &PieceSet::Letters,
        Orientation::WhiteBottom,
    );

    let e2 = view.get(sq("e2")).unwrap();
    assert!(e2.selected);
    assert!(!e2.highlighted);

    assert!(view.get(sq("e3")).unwrap().highlighted);
    assert!(view.get(sq("e4")).unwrap().highlighted);
    assert!(view.get(sq("g8")).unwrap().last_move);
    assert!(view.get(sq("f6")).unwrap().last_move);

    let flagged = view
        .squares
        .iter()
        .filter(|s| s.selected || s.highlighted || s.last_move)
        .count();
    assert_eq!(flagged, 5);
}

#[test]
fn test_pieces_resolve_per_kind_and_colour() {
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &PieceSet::Glyphs,
        Orientation::WhiteBottom,
    );
    let white_king = view.get(sq("e1")).unwrap().image.as_ref().unwrap();
    assert_eq!(white_king.id, "glyphs/king-white");
    assert_eq!(white_king.color, PieceColor::White);

    let black_knight = view.get(sq("g8")).unwrap().image.as_ref().unwrap();
    assert_eq!(black_knight.id, "glyphs/knight-black");
    assert!(view.get(sq("e4")).unwrap().image.is_none());
}

#[test]
fn test_unresolved_image_leaves_square_empty() {
    let manifest = ManifestResolver::from_json(
        r#"{
            "name": "kings-only",
            "pieces": { "wK": { "id": "kings/wK" }, "bK": { "id": "kings/bK" } }
        }"#,
    )
    .unwrap();
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &manifest,
        Orientation::WhiteBottom,
    );

    assert_eq!(view.get(sq("e1")).unwrap().image.as_ref().unwrap().id, "kings/wK");
    assert!(view.get(sq("d1")).unwrap().image.is_none());
    assert!(view.get(sq("e2")).unwrap().image.is_none());
}

/// Resolver that never finds anything.
struct Missing;

impl ImageResolver for Missing {
    fn name(&self) -> &str {
        "missing"
    }

    fn resolve(&self, _kind: PieceKind, _color: PieceColor) -> Option<PieceImage> {
        None
    }
}

#[test]
fn test_failing_resolver_renders_empty_board() {
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &Missing,
        Orientation::WhiteBottom,
    );
    assert!(view.squares.iter().all(|s| s.image.is_none()));
}

#[test]
fn test_flipped_board_puts_h1_top_left() {
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &PieceSet::Letters,
        Orientation::BlackBottom,
    );
    assert_eq!(view.at(0, 0).unwrap().square, sq("h1"));
    assert_eq!(view.at(7, 7).unwrap().square, sq("a8"));
}

#[test]
fn test_render_presentation_follows_controller() {
    let mut controller = BoardController::default();
    controller.handle_square_click(sq("e2"));
    let view = render_presentation(
        controller.presentation(),
        &PieceSet::Letters,
        Orientation::WhiteBottom,
    );
    assert!(view.get(sq("e2")).unwrap().selected);
    assert!(view.get(sq("e4")).unwrap().highlighted);
}

#[test]
fn test_flipped_geometry_maps_clicks_to_flipped_squares() {
    let area = Rect::new(0, 0, 90, 50);
    let geometry = BoardGeometry::for_area(area, Orientation::BlackBottom);
    let top_left = geometry.cell_rect(0, 0);
    assert_eq!(geometry.square_at(top_left.x, top_left.y), Some(sq("h1")));
    let bottom_right = geometry.cell_rect(7, 7);
    assert_eq!(
        geometry.square_at(bottom_right.x, bottom_right.y),
        Some(sq("a8"))
    );
}

#[test]
fn test_board_widget_draws_pieces_and_labels() {
    let view = render_board(
        &start_snapshot(),
        None,
        &[],
        None,
        &PieceSet::Letters,
        Orientation::WhiteBottom,
    );
    let theme = Theme::default();
    let area = Rect::new(0, 0, 60, 30);
    let mut buf = Buffer::empty(area);
    BoardWidget::new(&view, &theme).render(area, &mut buf);

    let geometry = BoardGeometry::for_area(area, Orientation::WhiteBottom);
    let contains = |rect: Rect, needle: &str| {
        (rect.y..rect.bottom()).any(|y| {
            (rect.x..rect.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .contains(needle)
        })
    };

    // e1 white king, e8 black king
    assert!(contains(geometry.cell_rect(4, 7), "K"));
    assert!(contains(geometry.cell_rect(4, 0), "k"));
    assert!(!contains(geometry.cell_rect(4, 4), "P"));

    let file_row = geometry.origin_y + 8 * geometry.square_height;
    let labels: String = (0..area.width).map(|x| buf[(x, file_row)].symbol()).collect();
    assert!(labels.contains('a') && labels.contains('h'));
}

#[test]
fn test_board_widget_tints_selected_square() {
    let view = render_board(
        &start_snapshot(),
        Some(sq("e2")),
        &[sq("e4")],
        None,
        &PieceSet::Letters,
        Orientation::WhiteBottom,
    );
    let theme = Theme::default();
    let area = Rect::new(0, 0, 60, 30);
    let mut buf = Buffer::empty(area);
    BoardWidget::new(&view, &theme).render(area, &mut buf);

    let geometry = BoardGeometry::for_area(area, Orientation::WhiteBottom);
    let e2 = geometry.cell_rect(4, 6);
    let e2_is_light = sq("e2").is_light();
    assert_eq!(
        buf[(e2.x, e2.y)].bg,
        theme.square_bg(e2_is_light, true, false)
    );

    // legal destination is outlined, not filled
    let e4 = geometry.cell_rect(4, 4);
    assert_eq!(buf[(e4.x, e4.y)].symbol(), "┌");
    assert_eq!(buf[(e4.x, e4.y)].fg, theme.highlight_border);
}
