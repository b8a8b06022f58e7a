//! End-to-end calls through `StringLib`, covering defaults, method calls and engine delegation.

use lunar_core::LuaString;
use lunar_stdlib::{
    CallError, LiteralEngine, MatchIter, PatternEngine, PatternError, StringLib, StringLibConfig, Value,
};

fn s(text: &str) -> Value {
    Value::from(text)
}

fn n(v: f64) -> Value {
    Value::Number(v)
}

fn nums(values: &[f64]) -> Value {
    Value::Tuple(values.iter().map(|&v| Value::Number(v)).collect())
}

#[test]
fn hello_world_scenario() {
    let lib = StringLib::new();
    assert_eq!(lib.call("sub", &[s("Hello, World!"), n(1.0), n(5.0)]).unwrap(), s("Hello"));
    assert_eq!(lib.call("sub", &[s("Hello, World!"), n(-6.0), n(-1.0)]).unwrap(), s("World!"));
    assert_eq!(lib.call("byte", &[s("Hello"), n(1.0), n(1.0)]).unwrap(), nums(&[72.0]));
    assert_eq!(lib.call("rep", &[s("ab"), n(0.0)]).unwrap(), s(""));
}

#[test]
fn sub_clamps_instead_of_failing() {
    let lib = StringLib::new();
    assert_eq!(lib.call("sub", &[s("hello"), n(10.0)]).unwrap(), s(""));
    assert_eq!(lib.call("sub", &[s("hello"), n(-100.0), n(2.0)]).unwrap(), s("he"));
    assert_eq!(lib.call("sub", &[s("hello"), n(0.0)]).unwrap(), s("hello"));
    assert_eq!(lib.call("sub", &[s("hello"), n(4.0), n(2.0)]).unwrap(), s(""));
    assert_eq!(lib.call("sub", &[s("hello"), Value::Nil, n(3.0)]).unwrap(), s("hel"));
}

#[test]
fn byte_and_unicode_defaults() {
    let lib = StringLib::new();
    assert_eq!(lib.call("byte", &[s("A")]).unwrap(), nums(&[65.0]));
    assert_eq!(lib.call("byte", &[s("abc"), n(2.0)]).unwrap(), nums(&[98.0]));
    assert_eq!(lib.call("byte", &[s("abc"), n(-2.0), n(-1.0)]).unwrap(), nums(&[98.0, 99.0]));
    assert_eq!(lib.call("byte", &[s("abc"), n(9.0)]).unwrap(), Value::Tuple(vec![]));
    assert_eq!(lib.call("byte", &[s("")]).unwrap(), Value::Tuple(vec![]));

    assert_eq!(lib.call("byte", &[s("€")]).unwrap(), nums(&[63.0]));
    assert_eq!(lib.call("unicode", &[s("€")]).unwrap(), nums(&[8364.0]));
}

#[test]
fn char_builds_strings() {
    let lib = StringLib::new();
    assert_eq!(lib.call("char", &[n(65.0), n(66.0), n(67.0)]).unwrap(), s("ABC"));
    assert_eq!(lib.call("char", &[]).unwrap(), s(""));
    assert_eq!(lib.call("char", &[n(8364.0)]).unwrap(), s("€"));
}

#[test]
fn case_mapping_and_reverse() {
    let lib = StringLib::new();
    assert_eq!(lib.call("upper", &[s("Hello, World!")]).unwrap(), s("HELLO, WORLD!"));
    assert_eq!(lib.call("lower", &[s("Hello, World!")]).unwrap(), s("hello, world!"));
    assert_eq!(lib.call("upper", &[s("straße")]).unwrap(), s("STRAßE"));
    assert_eq!(lib.call("lower", &[s("İ")]).unwrap(), s("İ"));
    assert_eq!(lib.call("reverse", &[s("stressed")]).unwrap(), s("desserts"));
    assert_eq!(lib.call("len", &[s("")]).unwrap(), n(0.0));
    assert_eq!(lib.call("len", &[s("lua")]).unwrap(), n(3.0));
}

#[test]
fn rep_non_positive_counts_are_empty() {
    let lib = StringLib::new();
    assert_eq!(lib.call("rep", &[s("ab"), n(3.0)]).unwrap(), s("ababab"));
    assert_eq!(lib.call("rep", &[s("ab"), n(-5.0)]).unwrap(), s(""));
    assert_eq!(lib.call("rep", &[s(""), n(100.0)]).unwrap(), s(""));
}

#[test]
fn missing_and_mistyped_arguments_are_argument_errors() {
    let lib = StringLib::new();

    let err = lib.call("rep", &[s("ab")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #2 to 'rep' (number expected, got no value)");

    let err = lib.call("len", &[n(42.0)]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'len' (string expected, got number)");

    let err = lib.call("sub", &[s("abc"), s("1")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #2 to 'sub' (number expected, got string)");

    let err = lib.call("find", &[s("abc"), s("b"), n(1.0), n(1.0)]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #4 to 'find' (boolean expected, got number)");

    let err = lib.call("char", &[n(65.0), Value::Nil]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #2 to 'char' (number expected, got nil)");
}

#[test]
fn absent_and_nil_arguments_are_reported_differently() {
    let lib = StringLib::new();
    let absent = lib.call("len", &[]).unwrap_err();
    assert_eq!(absent.to_string(), "bad argument #1 to 'len' (string expected, got no value)");

    let nil = lib.call("len", &[Value::Nil]).unwrap_err();
    assert_eq!(nil.to_string(), "bad argument #1 to 'len' (string expected, got nil)");
}

#[test]
fn unknown_function_is_reported_by_name() {
    let lib = StringLib::new();
    let err = lib.call("format", &[s("x")]).unwrap_err();
    assert_eq!(err, CallError::UnknownFunction("format".to_string()));
    assert_eq!(err.function(), Some("format"));
}

#[test]
fn method_calls_prepend_the_receiver() {
    let lib = StringLib::new();
    assert_eq!(lib.call_method(s("hello"), "sub", &[n(2.0), n(3.0)]).unwrap(), s("el"));
    assert_eq!(lib.call_method(s("hello"), "upper", &[]).unwrap(), s("HELLO"));

    let err = lib.call_method(n(5.0), "len", &[]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'len' (string expected, got number)");
}

#[test]
fn method_calls_can_be_disabled() {
    let lib = StringLib::new().with_config(StringLibConfig::new().with_string_methods(false));
    assert_eq!(lib.call_method(s("hello"), "len", &[]), Err(CallError::NoMethods));
    assert_eq!(lib.call("len", &[s("hello")]).unwrap(), n(5.0));
}

#[test]
fn literal_engine_delegation() {
    let lib = StringLib::new();
    assert_eq!(lib.call("find", &[s("Hello"), s("ll"), n(1.0), Value::Boolean(true)]).unwrap(), nums(&[3.0, 4.0]));
    assert_eq!(lib.call("find", &[s("Hello"), s("zz")]).unwrap(), Value::Nil);
    assert_eq!(lib.call("match", &[s("key=value"), s("value")]).unwrap(), s("value"));
    assert_eq!(
        lib.call("gsub", &[s("a,b,c"), s(","), s(";")]).unwrap(),
        Value::Tuple(vec![s("a;b;c"), n(2.0)])
    );
    assert_eq!(
        lib.call("gsub", &[s("a,b,c"), s(","), s(";"), n(1.0)]).unwrap(),
        Value::Tuple(vec![s("a;b,c"), n(1.0)])
    );

    let Value::Iterator(iter) = lib.call("gmatch", &[s("one two one"), s("one")]).unwrap() else {
        panic!("gmatch must return an iterator");
    };
    assert_eq!(iter.count(), 2);
}

#[test]
fn gsub_requires_a_replacement() {
    let lib = StringLib::new();
    let err = lib.call("gsub", &[s("abc"), s("b")]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #3 to 'gsub' (value expected, got no value)");

    let err = lib.call("gsub", &[s("abc"), s("b"), Value::Nil]).unwrap_err();
    assert_eq!(err, CallError::Pattern(PatternError::BadReplacement(lunar_stdlib::DataType::Nil)));
}

/// Records what it was asked and returns canned results.
#[derive(Default)]
struct RecordingEngine {
    seen: std::sync::Mutex<Vec<String>>,
}

impl PatternEngine for RecordingEngine {
    fn find(&self, s: &LuaString, pattern: &LuaString, init: i64, plain: bool) -> Result<Value, PatternError> {
        self.seen.lock().unwrap().push(format!("find {s} {pattern} {init} {plain}"));
        Ok(Value::Nil)
    }

    fn r#match(&self, s: &LuaString, pattern: &LuaString, init: i64) -> Result<Value, PatternError> {
        self.seen.lock().unwrap().push(format!("match {s} {pattern} {init}"));
        Err(PatternError::Malformed("unfinished capture".to_string()))
    }

    fn gmatch(&self, _s: &LuaString, _pattern: &LuaString) -> Result<MatchIter, PatternError> {
        Ok(MatchIter::new(std::iter::empty()))
    }

    fn gsub(&self, s: &LuaString, pattern: &LuaString, _repl: &Value, max: Option<i64>) -> Result<Value, PatternError> {
        self.seen.lock().unwrap().push(format!("gsub {s} {pattern} {max:?}"));
        LiteralEngine.gsub(s, pattern, &Value::from("x"), max)
    }
}

#[test]
fn defaults_are_filled_before_delegating() {
    let engine = std::sync::Arc::new(RecordingEngine::default());
    let lib = StringLib::with_engine(ArcEngine(engine.clone()));

    lib.call("find", &[s("abc"), s("b")]).unwrap();
    lib.call("find", &[s("abc"), s("b"), n(2.9), Value::Boolean(true)]).unwrap();
    lib.call("find", &[s("abc"), s("b"), n(f64::NAN)]).unwrap();
    let _ = lib.call("match", &[s("abc"), s("(")]);
    lib.call("gsub", &[s("abc"), s("b"), s("y")]).unwrap();
    lib.call("gsub", &[s("abc"), s("b"), s("y"), n(1.0)]).unwrap();

    let seen = engine.seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            format!("find abc b {} false", i64::MIN),
            "find abc b 2 true".to_string(),
            format!("find abc b {} false", i64::MIN),
            "match abc ( 1".to_string(),
            "gsub abc b None".to_string(),
            "gsub abc b Some(1)".to_string(),
        ]
    );
}

#[test]
fn engine_errors_pass_through_unchanged() {
    let lib = StringLib::with_engine(RecordingEngine::default());
    let err = lib.call("match", &[s("abc"), s("(")]).unwrap_err();
    assert_eq!(err, CallError::Pattern(PatternError::Malformed("unfinished capture".to_string())));
    assert_eq!(err.to_string(), "malformed pattern (unfinished capture)");
    assert_eq!(err.function(), None);
}

struct ArcEngine(std::sync::Arc<RecordingEngine>);

impl PatternEngine for ArcEngine {
    fn find(&self, s: &LuaString, pattern: &LuaString, init: i64, plain: bool) -> Result<Value, PatternError> {
        self.0.find(s, pattern, init, plain)
    }

    fn r#match(&self, s: &LuaString, pattern: &LuaString, init: i64) -> Result<Value, PatternError> {
        self.0.r#match(s, pattern, init)
    }

    fn gmatch(&self, s: &LuaString, pattern: &LuaString) -> Result<MatchIter, PatternError> {
        self.0.gmatch(s, pattern)
    }

    fn gsub(&self, s: &LuaString, pattern: &LuaString, repl: &Value, max: Option<i64>) -> Result<Value, PatternError> {
        self.0.gsub(s, pattern, repl, max)
    }
}

#[test]
fn library_is_shareable_across_threads() {
    let lib = std::sync::Arc::new(StringLib::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let lib = lib.clone();
            std::thread::spawn(move || lib.call("rep", &[s("x"), n(f64::from(i))]).unwrap())
        })
        .collect();
    let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![s(""), s("x"), s("xx"), s("xxx")]);
}
