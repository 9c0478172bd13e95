use pdf_core::errors::{ErrorInfo, PdfError};
use pdf_core::{Flavour, Pdf, PdfBundle, PdfModel};

struct DummyModel;

impl PdfModel for DummyModel {
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        if q2 <= 0.0 {
            return Err(PdfError::Kinematics(ErrorInfo::new("q2", "non-positive q2")));
        }
        Ok(PdfBundle::splat(x))
    }

    fn name(&self) -> &str {
        "dummy"
    }
}

fn accepts_trait_objects(model: &dyn PdfModel) -> Result<PdfBundle, PdfError> {
    model.all_pdfs(0.5, 2.0)
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn trait_objects_are_object_safe() {
    let boxed: Box<dyn PdfModel> = Box::new(DummyModel);
    assert_eq!(accepts_trait_objects(&*boxed).unwrap(), PdfBundle::splat(0.5));
    assert_eq!(accepts_trait_objects(&boxed).unwrap(), PdfBundle::splat(0.5));
    assert_eq!(boxed.name(), "dummy");
}

#[test]
fn container_is_send_and_sync() {
    assert_send_sync::<Pdf<'static>>();
    assert_send_sync::<PdfBundle>();
    assert_send_sync::<PdfError>();
}

#[test]
fn flavour_order_and_labels() {
    let labels: Vec<&str> = Flavour::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(
        labels,
        [
            "UP-VAL", "DOWN-VAL", "UP-SEA", "DOWN-SEA", "STRANGE", "CHARM", "BOTTOM", "TOP",
            "GLUON"
        ]
    );
    let valence: Vec<Flavour> = Flavour::ALL.into_iter().filter(|f| f.is_valence()).collect();
    assert_eq!(valence, [Flavour::UpValence, Flavour::DownValence]);
}

#[test]
fn bundle_get_follows_field_names() {
    let bundle = PdfBundle {
        uval: 1.0,
        dval: 2.0,
        usea: 3.0,
        dsea: 4.0,
        str: 5.0,
        chm: 6.0,
        bot: 7.0,
        top: 8.0,
        gl: 9.0,
    };
    let values: Vec<f64> = Flavour::ALL.iter().map(|f| bundle.get(*f)).collect();
    assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(PdfBundle::default(), PdfBundle::zero());
}

#[test]
fn bundle_serializes_with_short_field_names() {
    let json = serde_json::to_value(PdfBundle::splat(1.5)).unwrap();
    for key in ["uval", "dval", "usea", "dsea", "str", "chm", "bot", "top", "gl"] {
        assert_eq!(json[key], 1.5, "{key}");
    }
    assert_eq!(
        serde_json::to_value(Flavour::DownSea).unwrap(),
        serde_json::json!("down_sea")
    );
}

#[test]
fn bundle_scaling_matches_container_grouping() {
    let mut bundle = PdfBundle::splat(2.0);
    bundle.scale_valence(3.0);
    bundle.scale_sea(-0.5);
    for flavour in Flavour::ALL {
        let expected = if flavour.is_valence() { 6.0 } else { -1.0 };
        assert_eq!(bundle.get(flavour), expected, "{flavour}");
    }

    let model = DummyModel;
    let mut pdf = Pdf::new();
    pdf.set_model(&model);
    pdf.calculate(2.0, 1.0).unwrap();
    pdf.scale_valence(3.0);
    pdf.scale_sea(-0.5);
    assert_eq!(pdf.values(), bundle);
}
