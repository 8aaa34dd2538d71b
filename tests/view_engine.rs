use kreport::view::{
    Describe, DetailView, Field, FormatError, Formatter, GroupSpec, Record, TabAligner, TableView,
    ToValue, TypeDescriptor, Value, ViewError, ViewOptions,
};
use std::io::Write;

struct Limits {
    memory: Option<u64>,
}

impl Record for Limits {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "memory" => self.memory.to_value(),
            _ => Value::Nil,
        }
    }
}

struct Usage {
    cpu: f64,
    memory: u64,
    limits: Option<Box<Limits>>,
}

impl Record for Usage {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "cpu" => self.cpu.to_value(),
            "memory" => self.memory.to_value(),
            "limits" => match &self.limits {
                Some(limits) => Value::Ref(Box::new(Value::record(limits.as_ref()))),
                None => Value::Nil,
            },
            _ => Value::Nil,
        }
    }
}

struct Meta {
    namespace: String,
}

impl Record for Meta {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "namespace" => self.namespace.to_value(),
            _ => Value::Nil,
        }
    }
}

struct Worker {
    name: String,
    meta: Meta,
    usage: Usage,
    restarts: u32,
    elapsed: u64,
}

impl Record for Worker {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "name" => self.name.to_value(),
            "meta" => Value::record(&self.meta),
            "usage" => Value::record(&self.usage),
            "restarts" => self.restarts.to_value(),
            "elapsed" => self.elapsed.to_value(),
            _ => Value::Nil,
        }
    }
}

impl Describe for Worker {
    fn descriptor() -> TypeDescriptor {
        let limits = TypeDescriptor::new("Limits")
            .field(Field::new("memory").with_title("LIMIT").with_format("byte-size"));
        let usage = TypeDescriptor::new("Usage")
            .field(Field::new("cpu").with_title("CPU").with_format("percentage"))
            .field(Field::new("memory").with_title("MEM").with_format("byte-size"))
            .field(Field::record("limits", limits).with_group(GroupSpec::boxed("Limits")));
        let meta = TypeDescriptor::new("Meta").field(
            Field::new("namespace")
                .with_title("NAMESPACE")
                .with_default("default"),
        );
        TypeDescriptor::new("Worker")
            .field(Field::new("name").with_title("NAME"))
            .field(Field::record("meta", meta).with_group(GroupSpec::flatten("Meta")))
            .field(Field::record("usage", usage).with_group(GroupSpec::boxed("Usage")))
            .field(Field::new("restarts").with_title("RESTARTS").with_default("-"))
            .field(Field::new("elapsed").with_title("ELAPSED").with_format("duration"))
    }
}

fn worker(name: &str, restarts: u32, elapsed: u64) -> Worker {
    Worker {
        name: name.to_string(),
        meta: Meta {
            namespace: String::new(),
        },
        usage: Usage {
            cpu: 12.5,
            memory: 500,
            limits: None,
        },
        restarts,
        elapsed,
    }
}

fn workers() -> Vec<Worker> {
    let mut first = worker("w0", 0, 3661);
    first.meta.namespace = "ml".to_string();
    first.usage = Usage {
        cpu: 55.0,
        memory: 1536,
        limits: Some(Box::new(Limits {
            memory: Some(1073741824),
        })),
    };
    vec![first, worker("w1", 2, 59)]
}

fn table(options: ViewOptions, records: &[Worker]) -> (String, Option<String>) {
    let mut out = Vec::new();
    let mut view = TableView::of::<Worker>(options);
    view.render(&mut out, records);
    let error = view.error().map(|e| e.to_string());
    (String::from_utf8(out).unwrap(), error)
}

fn titles(options: ViewOptions) -> Vec<String> {
    TableView::of::<Worker>(options)
        .columns()
        .iter()
        .map(|c| c.title().to_string())
        .collect()
}

#[test]
fn test_table_with_nested_boxed_groups() {
    let (out, error) = table(ViewOptions::new(), &workers());
    assert!(error.is_none());
    assert_eq!(
        out,
        "\t\tUsage\t\t| Limits\t\t\n\
         NAME\tNAMESPACE\tCPU\tMEM\tLIMIT\tRESTARTS\tELAPSED\n\
         ----\t---------\t---\t---\t-----\t--------\t-------\n\
         w0\tml\t55.0%\t1.5 KiB\t1.0 GiB\t0\t01:01:01\n\
         w1\tdefault\t12.5%\t500 B\t\t2\t00:00:59\n"
    );
}

#[test]
fn test_detail_with_nested_boxed_groups() {
    let records = workers();
    let mut out = Vec::new();
    let mut view = DetailView::of::<Worker>(ViewOptions::new());
    view.render(&mut out, &records[0]);
    assert!(view.error().is_none());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "NAME:\tw0\n\
         NAMESPACE:\tml\n\
         Usage:\n  CPU:\t55.0%\n  MEM:\t1.5 KiB\n  Limits:\n    LIMIT:\t1.0 GiB\n\
         RESTARTS:\t0\n\
         ELAPSED:\t01:01:01\n"
    );
}

#[test]
fn test_group_with_only_empty_leaves() {
    let records = workers();

    // tree mode drops the title entirely
    let mut out = Vec::new();
    DetailView::of::<Worker>(ViewOptions::new()).render(&mut out, &records[1]);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Limits"));
    assert!(!text.contains("LIMIT"));

    // table mode keeps the label and an empty cell
    let (out, _) = table(ViewOptions::new(), &records[1..]);
    assert!(out.starts_with("\t\tUsage\t\t| Limits\t\t\n"));
    assert!(out.ends_with("w1\tdefault\t12.5%\t500 B\t\t2\t00:00:59\n"));
}

#[test]
fn test_no_directive_shows_all_leaves() {
    assert_eq!(
        titles(ViewOptions::new()),
        vec!["NAME", "NAMESPACE", "CPU", "MEM", "LIMIT", "RESTARTS", "ELAPSED"]
    );
}

#[test]
fn test_root_level_show_hides_siblings() {
    assert_eq!(titles(ViewOptions::new().show("name")), vec!["NAME"]);
}

#[test]
fn test_hide_wins_over_show() {
    let options = ViewOptions::new().show("restarts").hide("restarts");
    assert!(!titles(options).contains(&"RESTARTS".to_string()));
}

#[test]
fn test_dotted_show_keeps_default_visible() {
    assert_eq!(titles(ViewOptions::new().show("usage.cpu")).len(), 7);
}

#[test]
fn test_child_of_hidden_group_can_show_itself() {
    let options = ViewOptions::new().hide("usage").show("cpu");
    assert_eq!(titles(options), vec!["CPU"]);
}

#[test]
fn test_hide_all_with_group_show() {
    let options = ViewOptions::new().hide_all_by_default().show("usage");
    assert_eq!(titles(options), vec!["CPU", "MEM", "LIMIT"]);
}

#[test]
fn test_boxed_groups_restart_addressing() {
    let view = TableView::of::<Worker>(ViewOptions::new().hide("memory"));
    let columns = view.columns();
    let titles: Vec<&str> = columns.iter().map(|c| c.title()).collect();
    assert_eq!(titles, vec!["NAME", "NAMESPACE", "CPU", "RESTARTS", "ELAPSED"]);

    let all = TableView::of::<Worker>(ViewOptions::new());
    let sources: Vec<String> = all.columns().iter().map(|c| c.selector_path()).collect();
    assert_eq!(sources[3], "usage.memory");
    assert_eq!(sources[4], "usage.limits.memory");
    assert_eq!(all.columns()[4].address(), "memory");
    assert_eq!(all.columns()[1].address(), "namespace");
}

#[test]
fn test_formatter_error_on_third_of_five() {
    let records: Vec<Worker> = (0..5).map(|i| worker(&format!("w{i}"), 0, i)).collect();
    let options = ViewOptions::new().show("name").show("elapsed").formatter(
        "duration",
        Formatter::new(|value, record| match record.field("name") {
            Value::Str(ref name) if name == "w2" => Err(FormatError::new("clock skew")),
            _ => Ok(format!("{}s", value.as_f64().unwrap_or_default())),
        }),
    );
    let mut out = Vec::new();
    let mut view = TableView::of::<Worker>(options);
    view.render(&mut out, &records);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "NAME\tELAPSED\n----\t-------\nw0\t0s\nw1\t1s\n"
    );
    match view.error() {
        Some(ViewError::Format { field, source }) => {
            assert_eq!(field, "elapsed");
            assert_eq!(source.message(), "clock skew");
        }
        other => panic!("expected formatter error, got {other:?}"),
    }
}

#[test]
fn test_unknown_formatter_fails_before_writing() {
    let descriptor = TypeDescriptor::new("Worker")
        .field(Field::new("name"))
        .field(Field::new("elapsed").with_format("relative"));
    let mut out = Vec::new();
    let mut view = TableView::new(&descriptor, ViewOptions::new());
    view.render(&mut out, &workers()).render(&mut out, &workers());
    assert!(out.is_empty());
    assert!(matches!(view.into_result(), Err(ViewError::Schema(_))));
}

#[test]
fn test_aligned_output() {
    let mut sink = TabAligner::new(Vec::new());
    let options = ViewOptions::new().show("name").show("restarts");
    TableView::of::<Worker>(options).render(&mut sink, &workers());
    sink.flush().unwrap();
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(
        text,
        "NAME  RESTARTS\n\
         ----  --------\n\
         w0    0\n\
         w1    2\n"
    );
}
