use haggis_modeller::gfx::scene::MAX_DEPTH;
use haggis_modeller::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

fn random_edits(model: &mut SceneModel, rng: &mut StdRng) {
    let shape = model.current_shape_mut().unwrap();
    for _ in 0..6 {
        let axis = Axis::ALL[rng.random_range(0..3)];
        match rng.random_range(0..4) {
            0 => shape.translate(axis, rng.random_range(-3.0..3.0)),
            1 => shape.rotate(axis, rng.random_range(-720.0..720.0)),
            2 => shape.scale(axis, rng.random_range(0.25..4.0)),
            _ => shape.set_color([rng.random(), rng.random(), rng.random()]),
        }
    }
}

fn build_model(rng: &mut StdRng) -> SceneModel {
    let config = ModellerConfig::default().with_insert_policy(InsertPolicy::ChildOfCurrent);
    let mut model = SceneModel::with_config(&config);

    for i in 0..12 {
        if i % 4 == 0 {
            model.clear_selection();
        }
        let ty = ShapeType::ALL[rng.random_range(0..4)];
        model.add_shape(ty);
        random_edits(&mut model, rng);
    }
    model
}

fn snapshot(model: &SceneModel) -> Vec<(ShapeType, u32, Transform, Rgb, usize)> {
    let mut out = Vec::new();
    model.traverse(&mut |node, _| {
        if let Some(shape) = node.shape() {
            out.push((
                shape.shape_type(),
                shape.level().get(),
                shape.transform().clone(),
                shape.color(),
                node.children().len(),
            ));
        }
    });
    out
}

#[test]
fn save_then_load_reproduces_the_model() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.txt");
    let mut rng = StdRng::seed_from_u64(7);

    let original = build_model(&mut rng);
    original.save_to_file(&path).unwrap();

    let mut loaded = SceneModel::new();
    let report = loaded.load_from_file(&path).unwrap();

    assert!(report.issues.is_empty());
    assert_eq!(report.shape_count, original.shape_count());
    assert_eq!(snapshot(&loaded), snapshot(&original));

    // Global transforms match as well, not just the stored parts.
    let mut a = DrawList::new();
    let mut b = DrawList::new();
    original.render(&mut a);
    loaded.render(&mut b);
    let matrices = |list: &DrawList| -> Vec<Matrix4<f32>> {
        list.commands().iter().map(|c| c.model_matrix).collect()
    };
    assert_eq!(matrices(&a), matrices(&b));
}

#[test]
fn saving_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let mut rng = StdRng::seed_from_u64(42);

    let model = build_model(&mut rng);
    model.save_to_file(&first).unwrap();

    let mut reloaded = SceneModel::new();
    reloaded.load_from_file(&first).unwrap();
    reloaded.save_to_file(&second).unwrap();

    let a = std::fs::read_to_string(&first).unwrap();
    let b = std::fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with("# Shape Modeller Hierarchy v1\n"));
}

#[test]
fn save_replaces_existing_file_and_leaves_no_temp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.txt");
    std::fs::write(&path, "stale contents").unwrap();

    let mut model = SceneModel::new();
    model.add_shape(ShapeType::Cylinder);
    model.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("NODE CYLINDER 1"));

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn long_child_chain_survives_strict_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deep.txt");

    let config = ModellerConfig::default().with_insert_policy(InsertPolicy::ChildOfCurrent);
    let mut model = SceneModel::with_config(&config);
    for _ in 0..MAX_DEPTH + 44 {
        model.add_shape(ShapeType::Box);
    }
    model.save_to_file(&path).unwrap();

    let strict = ModellerConfig::default().with_strict_parsing(true);
    let mut loaded = SceneModel::with_config(&strict);
    let report = loaded.load_from_file(&path).unwrap();

    assert_eq!(report.shape_count, model.shape_count());
    assert!(report.issues.is_empty());
    assert_eq!(snapshot(&loaded), snapshot(&model));
}

#[test]
fn save_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("model.txt");

    let mut model = SceneModel::new();
    model.add_shape(ShapeType::Box);
    assert!(matches!(model.save_to_file(&path), Err(CodecError::Write { .. })));
}

#[test]
fn failed_load_keeps_current_model() {
    let dir = TempDir::new().unwrap();
    let mut model = SceneModel::new();
    model.add_shape(ShapeType::Sphere);
    model.add_shape(ShapeType::Cone);

    let result = model.load_from_file(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(CodecError::Read { .. })));
    assert_eq!(model.shape_count(), 2);
    assert_eq!(model.current_path(), Some(&NodePath::top_level(1)));
}

#[test]
fn lenient_load_reports_issues_but_keeps_good_nodes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("damaged.txt");
    std::fs::write(
        &path,
        "\
# Shape Modeller Hierarchy v1
NODE BOX 2 0 0 0 0 0 0 1 1 1 1 1 1
CHILD
  NODE TORUS 1 0 0 0 0 0 0 1 1 1 1 1 1
  ENDNODE
  NODE SPHERE 1 0 1 0 0 0 0 1 1 1 1 0 0
  ENDNODE
ENDCHILD
ENDNODE
ENDNODE
",
    )
    .unwrap();

    let mut model = SceneModel::new();
    let report = model.load_from_file(&path).unwrap();

    assert_eq!(report.shape_count, 2);
    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].line, 4);
    assert_eq!(report.issues[1].line, 10);
    assert_eq!(model.nodes()[0].children().len(), 1);
}

#[test]
fn app_round_trip_through_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.txt");
    let script = format!(
        "add box\ntransform r\naxis y\n+\n+\nadd cone\ncolor 0 0 1\nsave {}\nremove\nremove\nload {}\nstats\n",
        path.display(),
        path.display()
    );

    let mut app = ModellerApp::default();
    let mut output = Vec::new();
    app.run(script.as_bytes(), &mut output).unwrap();

    assert_eq!(app.model().shape_count(), 2);
    let first = app.model().nodes()[0].shape().unwrap();
    assert_eq!(first.shape_type(), ShapeType::Box);
    assert_eq!(first.transform().rotation().y, 10.0);
    assert_eq!(app.model().nodes()[1].shape().unwrap().color(), [0.0, 0.0, 1.0]);

    let text = String::from_utf8(output).unwrap();
    assert!(text.lines().all(|line| !line.starts_with("error")), "{}", text);
}
