use exam_extract::services::{ResultWriter, WordExporter};
use exam_extract::{App, Config, QuestionExtractor, UNKNOWN_ANSWER};
use std::fs;
use std::path::PathBuf;

const VALID_BLOCK: &str = r#"
    <div class="answerCon">
        <i class="qtContent">中国的首都是哪座城市？</i>
        <div class="optionCon">A. 北京</div>
        <div class="optionCon">B. 上海</div>
        <div class="answerInfo"><p>A</p></div>
    </div>
"#;

/// 为每个测试创建独立的临时目录
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("exam_extract_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("创建临时目录失败");
    dir
}

/// 写入测试用的 HTML 夹具文件
fn write_fixtures(dir: &PathBuf) -> Vec<PathBuf> {
    // a.html: 两个有效题目块 + 一个共用容器类的装饰性块
    let a = dir.join("a.html");
    fs::write(
        &a,
        format!(
            r#"<html><body>
            {VALID_BLOCK}
            <div class="answerCon"><span>装饰性内容</span></div>
            <div class="answerCon">
                <i class="qtContent">长江流经哪些省份？</i>
            </div>
            </body></html>"#
        ),
    )
    .expect("写入 a.html 失败");

    // b.html: 非 UTF-8 内容
    let b = dir.join("b.html");
    fs::write(&b, [0xff, 0xfe, 0x00, 0xd8]).expect("写入 b.html 失败");

    // c.html: 没有任何题目块标记
    let c = dir.join("c.html");
    fs::write(&c, "<html><body><p>无关页面</p></body></html>").expect("写入 c.html 失败");

    vec![a, b, c]
}

#[test]
fn test_batch_extraction_tolerates_bad_files() {
    let dir = temp_dir("batch");
    let files = write_fixtures(&dir);

    let extractor = QuestionExtractor::new().expect("创建提取服务失败");

    let mut progress_calls: Vec<(usize, usize)> = Vec::new();
    let mut log_lines: Vec<String> = Vec::new();
    let mut on_progress = |done: usize, total: usize| progress_calls.push((done, total));
    let mut on_log = |msg: &str| log_lines.push(msg.to_string());

    let outcome = extractor.extract(&files, Some(&mut on_progress), Some(&mut on_log));

    // a.html 贡献 2 条记录（装饰性块被跳过），且不在未处理清单中
    assert_eq!(outcome.records.len(), 2);
    assert!(!outcome.unprocessed.contains(&files[0]));
    assert_eq!(outcome.records[0].question, "中国的首都是哪座城市？");
    assert_eq!(outcome.records[0].options, vec!["A.北京", "B.上海"]);
    assert_eq!(outcome.records[0].answer, "A");
    assert_eq!(outcome.records[1].answer, UNKNOWN_ANSWER);

    // b.html 与 c.html 各在未处理清单中出现一次
    assert_eq!(outcome.unprocessed, vec![files[1].clone(), files[2].clone()]);

    // 诊断日志分别提到两个文件
    assert!(log_lines.iter().any(|l| l.starts_with("处理失败") && l.contains("b.html")));
    assert!(log_lines.iter().any(|l| l.starts_with("未找到题目") && l.contains("c.html")));

    // 进度回调：每个文件恰好一次，首参递增，总数恒定
    assert_eq!(progress_calls, vec![(1, 3), (2, 3), (3, 3)]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_extraction_is_idempotent() {
    let dir = temp_dir("idempotent");
    let files = write_fixtures(&dir);

    let extractor = QuestionExtractor::new().expect("创建提取服务失败");
    let first = extractor.extract(&files, None, None);
    let second = extractor.extract(&files, None, None);

    assert_eq!(first, second);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_transcript_round_trip() {
    let dir = temp_dir("round_trip");
    fs::write(dir.join("题.html"), format!("<html>{VALID_BLOCK}</html>"))
        .expect("写入夹具失败");

    let extractor = QuestionExtractor::new().expect("创建提取服务失败");
    let outcome = extractor.extract(&[dir.join("题.html")], None, None);
    assert_eq!(outcome.records.len(), 1);

    let writer = ResultWriter::new(&dir);
    let path = writer
        .save(&outcome.records, "结果.txt")
        .await
        .expect("写出结果失败");

    // 重新读取文本，题干、选项、答案应原样保留
    let text = fs::read_to_string(&path).expect("读取结果失败");
    assert!(text.contains("第1题: 中国的首都是哪座城市？"));
    assert!(text.contains("  A.北京"));
    assert!(text.contains("  B.上海"));
    assert!(text.contains("答案: A"));

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_full_pipeline_with_word_and_json_export() {
    let input_dir = temp_dir("pipeline_in");
    let output_root = temp_dir("pipeline_out");
    write_fixtures(&input_dir);

    let config = Config {
        output_root: output_root.display().to_string(),
        ..Config::default()
    };

    let app = App::initialize(config).expect("初始化应用失败");
    app.run(&input_dir, "结果.txt", true, true)
        .await
        .expect("运行应用失败");

    // 文本、JSON、Word、未处理清单都应落盘
    assert!(output_root.join("Text").join("结果.txt").exists());
    assert!(output_root.join("Text").join("结果.json").exists());
    assert!(output_root.join("Word").join("结果.docx").exists());
    assert!(output_root.join("unprocessed.txt").exists());

    let unprocessed =
        fs::read_to_string(output_root.join("unprocessed.txt")).expect("读取清单失败");
    assert!(unprocessed.contains("b.html"));
    assert!(unprocessed.contains("c.html"));
    assert!(!unprocessed.contains("a.html"));

    // JSON 结果可反序列化回记录列表
    let json = fs::read_to_string(output_root.join("Text").join("结果.json")).expect("读取JSON失败");
    let records: Vec<exam_extract::QuestionRecord> =
        serde_json::from_str(&json).expect("解析JSON失败");
    assert_eq!(records.len(), 2);

    let _ = fs::remove_dir_all(&input_dir);
    let _ = fs::remove_dir_all(&output_root);
}

#[test]
fn test_word_exporter_produces_docx() {
    let dir = temp_dir("word");
    let txt = dir.join("结果.txt");
    fs::write(&txt, "第1题: 题干\n答案: A\n").expect("写入文本失败");

    let exporter = WordExporter::new(&dir);
    let docx = exporter.convert_txt_to_word(&txt).expect("转换失败");

    assert_eq!(docx.extension().and_then(|s| s.to_str()), Some("docx"));
    // .docx 是 zip 包，应以 PK 魔数开头
    let bytes = fs::read(&docx).expect("读取docx失败");
    assert_eq!(&bytes[..2], b"PK");

    let _ = fs::remove_dir_all(&dir);
}
