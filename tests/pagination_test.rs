//! End-to-end pagination tests.
//!
//! Each test builds an in-memory file map the way a host pipeline would hand
//! it over, runs the plugin, and inspects the resulting map.

use chrono::{DateTime, TimeZone, Utc};
use simple_pagination::util::get_nested_property;
use simple_pagination::{
    Config, Error, FileMap, FileRecord, Metadata, MissingDate, Options, Plugin, SimplePagination,
    Value,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, d, 0, 0, 0).unwrap()
}

fn post(n: u32) -> FileRecord {
    FileRecord::new()
        .with_field("title", format!("Post {n}"))
        .with_field("date", day(n))
        .with_contents(format!("# Post {n}").into_bytes())
}

/// `count` dated posts plus the `blog.md` first index file.
fn blog(count: u32) -> FileMap {
    let mut files: FileMap = (1..=count)
        .map(|n| (format!("blog/post{n}.md"), post(n)))
        .collect();
    files.insert(
        "blog.md",
        FileRecord::new()
            .with_field("title", "Blog Index")
            .with_contents(b"# Blog".to_vec()),
    );
    files
}

fn run(options: Options, files: &mut FileMap) {
    init_logging();
    SimplePagination::new(options)
        .run(files, &Metadata::new())
        .unwrap();
}

fn field<'a>(files: &'a FileMap, key: &str, path: &str) -> Option<&'a Value> {
    get_nested_property(files.get(key)?.fields(), path)
}

fn str_field<'a>(files: &'a FileMap, key: &str, path: &str) -> Option<&'a str> {
    field(files, key, path).and_then(Value::as_str)
}

fn listed_paths(files: &FileMap, key: &str) -> Vec<String> {
    field(files, key, "pagination.files")
        .and_then(Value::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(|d| d.get("path").and_then(Value::as_str).map(str::to_string))
        .collect()
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_runs_with_defaults() {
    let mut files = blog(1);
    run(Options::default(), &mut files);

    assert!(files.contains("blog/post1/index.md"));
    assert!(!files.contains("blog/post1.md"));
    assert_eq!(field(&files, "blog.md", "pagination.num").and_then(Value::as_f64), Some(1.0));
}

#[test]
fn test_extension_style_urls() {
    let mut files = blog(4);
    run(
        Options {
            per_page: Some(2),
            use_permalinks: Some(false),
            ..Options::default()
        },
        &mut files,
    );

    assert_eq!(str_field(&files, "blog.md", "pagination.next"), Some("/blog/2.html"));
    assert_eq!(str_field(&files, "blog/2.html", "pagination.previous"), Some("/blog.html"));
    assert_eq!(str_field(&files, "blog/2.html", "pagination.first"), Some("/blog.html"));

    // Members keep their paths and are stamped in place
    for n in 1..=4 {
        let key = format!("blog/post{n}.md");
        assert!(files.contains(&key));
        assert_eq!(field(&files, &key, "totalPages").and_then(Value::as_f64), Some(2.0));
    }
    assert_eq!(
        listed_paths(&files, "blog.md"),
        vec!["/blog/post4.html", "/blog/post3.html"]
    );
}

#[test]
fn test_permalink_style_urls() {
    let mut files = blog(5);
    run(
        Options {
            per_page: Some(2),
            ..Options::default()
        },
        &mut files,
    );

    assert_eq!(str_field(&files, "blog/2/index.html", "pagination.first"), Some("/blog/"));
    assert_eq!(str_field(&files, "blog/2/index.html", "pagination.previous"), Some("/blog/"));
    assert_eq!(str_field(&files, "blog/2/index.html", "pagination.next"), Some("/blog/3/"));
    assert_eq!(str_field(&files, "blog/2/index.html", "pagination.last"), Some("/blog/3/"));
    assert!(field(&files, "blog/3/index.html", "pagination.next").is_some_and(Value::is_null));
    assert!(field(&files, "blog.md", "pagination.previous").is_some_and(Value::is_null));

    assert_eq!(listed_paths(&files, "blog/3/index.html"), vec!["/blog/post1/"]);
    assert_eq!(
        field(&files, "blog/post1/index.md", "originalPath").and_then(Value::as_str),
        Some("blog/post1.md")
    );
    assert_eq!(
        field(&files, "blog/post1/index.md", "pageNumber").and_then(Value::as_f64),
        Some(3.0)
    );
}

#[test]
fn test_custom_first_index_file() {
    let mut files = blog(2);
    files.remove("blog.md");
    files.insert("custom-blog-index.md", FileRecord::new().with_field("title", "Custom"));

    run(
        Options {
            first_index_file: Some("custom-blog-index.md".to_string()),
            ..Options::default()
        },
        &mut files,
    );

    assert_eq!(
        field(&files, "custom-blog-index.md", "pagination.num").and_then(Value::as_f64),
        Some(1.0)
    );
    assert_eq!(listed_paths(&files, "custom-blog-index.md").len(), 2);
}

#[test]
fn test_empty_directory_is_noop() {
    let mut files: FileMap = vec![
        ("other/file.md", FileRecord::new().with_field("title", "Other File")),
        ("blog.md", FileRecord::new().with_field("title", "Blog Index")),
    ]
    .into_iter()
    .collect();
    let before = files.clone();

    let mut outcome = None;
    SimplePagination::default().run_with_callback(&mut files, &Metadata::new(), |err| {
        outcome = Some(err.is_none())
    });

    assert_eq!(outcome, Some(true));
    assert_eq!(files, before);
    assert!(field(&files, "blog.md", "pagination").is_none());
}

#[test]
fn test_missing_first_index_file_is_skipped() {
    let mut files = blog(3);
    files.remove("blog.md");

    run(
        Options {
            per_page: Some(2),
            ..Options::default()
        },
        &mut files,
    );

    assert!(!files.contains("blog.md"));
    assert!(files.contains("blog/2/index.html"));
    assert!(files.contains("blog/post3/index.md"));
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn test_global_metadata_on_later_pages() {
    let mut files = blog(2);
    let mut metadata = Metadata::new();
    metadata.insert("siteName".to_string(), Value::from("Test Site"));
    metadata.insert("siteUrl".to_string(), Value::from("https://example.com"));
    metadata.insert("layout".to_string(), Value::from("site.njk"));
    metadata.insert("contents".to_string(), Value::from("not bytes"));

    SimplePagination::new(Options {
        per_page: Some(1),
        ..Options::default()
    })
    .run(&mut files, &metadata)
    .unwrap();

    let index = files.get("blog/2/index.html").unwrap();
    assert_eq!(index.get("siteName").and_then(Value::as_str), Some("Test Site"));
    assert_eq!(index.get("siteUrl").and_then(Value::as_str), Some("https://example.com"));
    assert_eq!(index.get("layout").and_then(Value::as_str), Some("blog-index.njk"));
    assert_eq!(index.contents(), Some(&b""[..]));

    // Page 1 only receives pagination fields
    assert!(field(&files, "blog.md", "siteName").is_none());
}

#[test]
fn test_file_details_have_no_contents() {
    let mut files = blog(3);
    run(
        Options {
            per_page: Some(2),
            ..Options::default()
        },
        &mut files,
    );

    for key in ["blog.md", "blog/2/index.html"] {
        let details = field(&files, key, "pagination.files").and_then(Value::as_array).unwrap();
        assert!(details.iter().all(|d| d.get("contents").is_none()));
        let page_files = field(&files, key, "pageFiles").and_then(Value::as_array).unwrap();
        assert_eq!(details, page_files);
    }

    // Live records keep their contents
    assert!(files.get("blog/post1/index.md").unwrap().contents().is_some());
}

#[test]
fn test_index_dates() {
    let mut files = blog(3);
    files.insert(
        "blog.md",
        FileRecord::new().with_field("date", "2019-12-31"),
    );
    run(
        Options {
            per_page: Some(2),
            ..Options::default()
        },
        &mut files,
    );

    // Newest member of page 2 (post1)
    assert_eq!(
        field(&files, "blog/2/index.html", "date").and_then(Value::as_date),
        Some(day(1))
    );
    // Author-supplied date is kept
    assert_eq!(str_field(&files, "blog.md", "date"), Some("2019-12-31"));
}

#[test]
fn test_first_page_gets_found_date() {
    let mut files = blog(2);
    run(Options::default(), &mut files);
    assert_eq!(field(&files, "blog.md", "date").and_then(Value::as_date), Some(day(2)));
}

#[test]
fn test_missing_date_policy() {
    let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    let undated = || -> FileMap {
        vec![
            ("blog/a.md", FileRecord::new()),
            ("blog/b.md", FileRecord::new()),
            ("blog.md", FileRecord::new()),
        ]
        .into_iter()
        .collect()
    };

    let mut files = undated();
    SimplePagination::with_config(Config::default().with_per_page(1))
        .paginate(&mut files, &Metadata::new(), now)
        .unwrap();
    assert_eq!(field(&files, "blog/2/index.html", "date").and_then(Value::as_date), Some(now));
    assert_eq!(field(&files, "blog.md", "date").and_then(Value::as_date), Some(now));

    let mut files = undated();
    SimplePagination::with_config(
        Config::default()
            .with_per_page(1)
            .with_missing_date(MissingDate::None),
    )
    .paginate(&mut files, &Metadata::new(), now)
    .unwrap();
    assert!(files.get("blog/2/index.html").unwrap().get("date").unwrap().is_null());
    assert!(!files.get("blog.md").unwrap().contains("date"));
}

// ============================================================================
// Ordering and options
// ============================================================================

#[test]
fn test_ascending_is_reverse_of_descending() {
    let options = |reverse| Options {
        per_page: Some(10),
        reverse: Some(reverse),
        use_permalinks: Some(false),
        ..Options::default()
    };

    let mut descending = blog(6);
    run(options(true), &mut descending);
    let mut ascending = blog(6);
    run(options(false), &mut ascending);

    let mut expected = listed_paths(&descending, "blog.md");
    expected.reverse();
    assert_eq!(listed_paths(&ascending, "blog.md"), expected);
}

#[test]
fn test_custom_directory_and_output_pattern() {
    let mut files: FileMap = (1..=3)
        .map(|n| (format!("news/item{n}.md"), post(n)))
        .collect();
    files.insert("news.md", FileRecord::new());

    run(
        Options {
            directory: Some("news".to_string()),
            per_page: Some(1),
            output_dir: Some("archive/:directory/page-:num".to_string()),
            first_index_file: Some("news.md".to_string()),
            index_layout: Some("news.njk".to_string()),
            ..Options::default()
        },
        &mut files,
    );

    assert!(files.contains("archive/news/page-2/index.html"));
    assert!(files.contains("archive/news/page-3/index.html"));
    assert_eq!(
        str_field(&files, "news.md", "pagination.next"),
        Some("/archive/news/page-2/")
    );
    assert_eq!(
        str_field(&files, "archive/news/page-3/index.html", "pagination.previous"),
        Some("/archive/news/page-2/")
    );
    assert_eq!(
        str_field(&files, "archive/news/page-2/index.html", "layout"),
        Some("news.njk")
    );
}

#[test]
fn test_json_front_matter_and_options() {
    let front_matter = serde_json::json!({
        "title": "From JSON",
        "meta": { "published": "2022-03-04" }
    });
    let record = match Value::from(front_matter) {
        Value::Map(fields) => FileRecord::from(fields),
        other => panic!("Expected map, got {:?}", other),
    };
    let mut files: FileMap = vec![
        ("blog/json.md", record),
        ("blog/plain.md", FileRecord::new()),
        ("blog.md", FileRecord::new()),
    ]
    .into_iter()
    .collect();

    let plugin = SimplePagination::from_json(r#"{ "sortBy": "meta.published" }"#).unwrap();
    plugin.run(&mut files, &Metadata::new()).unwrap();

    // Descending: the undated file sorts first, the date comes from the second
    assert_eq!(
        listed_paths(&files, "blog.md"),
        vec!["/blog/plain/", "/blog/json/"]
    );
    assert_eq!(
        field(&files, "blog.md", "date").and_then(Value::as_date),
        Some(Utc.with_ymd_and_hms(2022, 3, 4, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_repeatable_with_fixed_clock() {
    let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let plugin = SimplePagination::with_config(Config::default().with_per_page(2));
    let mut metadata = Metadata::new();
    metadata.insert("siteName".to_string(), Value::from("Site"));

    let mut first = blog(5);
    plugin.paginate(&mut first, &metadata, now).unwrap();
    let mut second = blog(5);
    plugin.paginate(&mut second, &metadata, now).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_per_page_reported_once() {
    let mut files = blog(2);
    let before = files.clone();
    let mut errors = Vec::new();

    SimplePagination::new(Options {
        per_page: Some(0),
        ..Options::default()
    })
    .run_with_callback(&mut files, &Metadata::new(), |err| errors.push(err));

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], Some(Error::InvalidPerPage(0))));
    assert_eq!(files, before);
}
