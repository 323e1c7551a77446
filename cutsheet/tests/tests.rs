#[cfg(test)]
mod tests {
    use cutsheet::entities::{
        Diagnostic, DiagnosticKind, MaterialLayout, Orientation, PackingResult, PieceRequest, PlacedPiece, Sheet,
        StockSheet,
    };
    use cutsheet::io::export;
    use cutsheet::io::ext_repr::{ExtInstance, ExtUnit};
    use cutsheet::io::import::Importer;
    use cutsheet::io::svg::{SvgDrawOptions, sheet_to_svg};
    use cutsheet::util::assertions;
    use test_case::test_case;

    const INSTANCE: &str = r#"{
        "name": "desk",
        "sheets": { "default": { "width": 2440.0, "height": 1220.0 } },
        "pieces": [ { "id": "top", "material": "MDF", "width": 1400.0, "height": 700.0 } ],
        "components": [
            { "id": "leg", "material": "Madera pino", "dimensions": { "length": 72.0, "height": 60.0 } }
        ]
    }"#;

    fn single_sheet_result() -> (Vec<PieceRequest>, PackingResult) {
        let stock = StockSheet::default();
        let requests = vec![
            PieceRequest::new("top", "MDF", 1400.0, 700.0),
            PieceRequest::new("bad", "MDF", f32::NAN, 700.0),
        ];
        let mut sheet = Sheet::new(1);
        sheet.place(
            PlacedPiece::new(&requests[0], stock.origin(), Orientation::Original),
            &stock,
        );
        let mut result = PackingResult::default();
        result.layouts.insert(
            "MDF".into(),
            MaterialLayout {
                material: "MDF".into(),
                stock,
                sheets: vec![sheet],
            },
        );
        result.diagnostics.push(Diagnostic::new(
            "bad",
            DiagnosticKind::InvalidDimension {
                width: f32::NAN,
                height: 700.0,
            },
        ));
        (requests, result)
    }

    #[test]
    fn instance_defaults_are_applied() {
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        assert_eq!(ext_instance.sheets.default.margin, 20.0);
        assert_eq!(ext_instance.sheets.default.spacing, 20.0);
        assert_eq!(ext_instance.components[0].dimensions.unit, ExtUnit::Cm);

        let (pieces, catalog) = Importer::default().import_instance(&ext_instance).unwrap();
        assert_eq!(catalog.default, StockSheet::default());
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[1], PieceRequest::new("leg", "Madera pino", 720.0, 600.0));
    }

    #[test]
    fn hand_built_result_is_valid() {
        let (requests, result) = single_sheet_result();
        assert!(assertions::result_matches_requests(&requests, &result));
    }

    #[test]
    fn missing_piece_is_detected() {
        let (mut requests, result) = single_sheet_result();
        requests.push(PieceRequest::new("forgotten", "MDF", 10.0, 10.0));
        assert!(!assertions::result_matches_requests(&requests, &result));
    }

    #[test]
    fn solution_is_exported_to_json() {
        let (_, result) = single_sheet_result();
        let solution = export::export(&result);
        let json = serde_json::to_value(&solution).unwrap();

        assert_eq!(json["n_sheets"], 1);
        assert_eq!(json["n_placed"], 1);
        assert_eq!(json["layouts"][0]["material"], "MDF");
        assert_eq!(json["layouts"][0]["sheets"][0]["file_stem"], "layout_MDF_sheet_1");
        assert_eq!(json["layouts"][0]["sheets"][0]["placed_pieces"][0]["id"], "top");
        assert_eq!(json["diagnostics"][0]["reason"], "invalid dimension");
    }

    #[test_case(800.0, 400.0; "default canvas")]
    #[test_case(1600.0, 1600.0; "square canvas")]
    fn diagram_fits_canvas(canvas_width: f32, canvas_height: f32) {
        let (_, result) = single_sheet_result();
        let layout = &result.layouts["MDF"];
        let options = SvgDrawOptions {
            canvas_width,
            canvas_height,
            ..SvgDrawOptions::default()
        };
        let svg = sheet_to_svg(&layout.sheets[0], "MDF", &layout.stock, options).to_string();

        assert!(svg.contains("id=\"piece_top\""));
        assert!(svg.contains("140x70"));
    }
}
