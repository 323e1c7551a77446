use crate::entities::{PlacedPiece, Sheet, StockSheet};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util::{SvgDrawOptions, change_brightness, data_to_path, rect_data};
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Factor mapping sheet coordinates onto the canvas, preserving the aspect ratio of the sheet.
pub fn diagram_scale(stock: &StockSheet, options: &SvgDrawOptions) -> f32 {
    f32::min(
        options.canvas_width / stock.width(),
        options.canvas_height / stock.height(),
    )
}

/// Draws the cutting diagram of a single sheet.
/// Every placed piece is drawn at `(x * scale, y * scale)` with its effective dimensions scaled by the same factor.
pub fn sheet_to_svg(
    sheet: &Sheet,
    material: &str,
    stock: &StockSheet,
    options: SvgDrawOptions,
) -> Document {
    let theme = &options.theme;
    let scale = diagram_scale(stock, &options);
    let scaled = |r: Rect| Rect {
        x_min: r.x_min * scale,
        y_min: r.y_min * scale,
        x_max: r.x_max * scale,
        y_max: r.y_max * scale,
    };

    let stroke_width = format!("{}", theme.stroke_width);
    let font_size = theme.font_size;

    //the physical board, margin included
    let board = {
        let bbox = Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: stock.width(),
            y_max: stock.height(),
        };
        let title = Title::new(format!(
            "sheet {} of {}, {} x {}",
            sheet.index,
            material,
            stock.width(),
            stock.height()
        ));
        let mut group = Group::new().set("id", format!("sheet_{}", sheet.index)).add(
            data_to_path(
                rect_data(&scaled(bbox)),
                &[
                    ("fill", &*format!("{}", theme.sheet_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*stroke_width),
                ],
            )
            .add(title),
        );
        if options.usable_area {
            group = group.add(data_to_path(
                rect_data(&scaled(stock.usable_rect())),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.usable_area_stroke)),
                    ("stroke-width", &*stroke_width),
                    ("stroke-dasharray", "5 5"),
                ],
            ));
        }
        group
    };

    let pieces = sheet
        .placed_pieces()
        .iter()
        .fold(Group::new().set("id", "pieces"), |group, pp| {
            group.add(piece_group(pp, scaled(pp.bbox()), &options))
        });

    let header = Text::new(format!(
        "Material: {} | sheet {} ({} x {}) | efficiency {:.2}%",
        material,
        sheet.index,
        stock.width(),
        stock.height(),
        sheet.efficiency_pct(stock)
    ))
    .set("x", 4.0)
    .set("y", 4.0 + font_size)
    .set("font-size", font_size * 1.2)
    .set("font-family", "monospace")
    .set("font-weight", "500")
    .set("fill", format!("{}", theme.text_color));

    let vbox_width = stock.width() * scale;
    let vbox_height = stock.height() * scale;

    Document::new()
        .set("viewBox", (0.0, 0.0, vbox_width, vbox_height))
        .set("width", vbox_width)
        .set("height", vbox_height)
        .add(board)
        .add(pieces)
        .add(header)
}

fn piece_group(pp: &PlacedPiece, bbox: Rect, options: &SvgDrawOptions) -> Group {
    let theme = &options.theme;
    let fill = match pp.overflow {
        true => theme.overflow_fill,
        false => theme.piece_fill,
    };
    let title = Title::new(format!(
        "piece, id: {}, {} x {}{}{}",
        pp.id,
        pp.width,
        pp.height,
        if pp.rotated { ", rotated" } else { "" },
        if pp.overflow { ", overflow" } else { "" },
    ));

    let mut group = Group::new().set("id", format!("piece_{}", pp.id)).add(
        data_to_path(
            rect_data(&bbox),
            &[
                ("fill", &*format!("{fill}")),
                ("stroke", &*format!("{}", change_brightness(fill, 0.5))),
                ("stroke-width", &*format!("{}", theme.stroke_width)),
            ],
        )
        .add(title),
    );

    if options.piece_labels {
        let centroid = bbox.centroid();
        let label = |content: String, dy: f32| {
            Text::new(content)
                .set("x", centroid.x())
                .set("y", centroid.y() + dy)
                .set("font-size", theme.font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle")
                .set("fill", format!("{}", theme.text_color))
        };
        //dimensions are printed in cm
        let dims = format!("{:.0}x{:.0}", pp.width / 10.0, pp.height / 10.0);
        group = group
            .add(label(pp.id.clone(), 0.0))
            .add(label(dims, theme.font_size));
    }
    group
}
