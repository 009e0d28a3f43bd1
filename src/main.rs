//! hangul-regexp - 한글 검색어를 정규식 패턴으로 변환

use hangul_regexp::{compile, load_options, PatternError, PatternOptions};
use std::process::ExitCode;

const USAGE: &str = "\
사용법: hangul-regexp [옵션] <검색어>...

옵션:
  --ignore-space     글자 사이 공백 허용
  --fuzzy            글자 사이 임의 문자 허용
  --choseong         중간 위치 낱자음도 초성으로 확장
  --capturing        글자 단위 캡처 그룹 생성
  --config <파일>    JSON 옵션 파일 (명시한 옵션이 추가로 켜짐)
  -h, --help         도움말";

/// 명령행 인자
struct Args {
    options: PatternOptions,
    searches: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Args>, String> {
    let mut config_path = None;
    let mut flags = PatternOptions::default();
    let mut searches = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--ignore-space" => flags.ignore_space = true,
            "--fuzzy" => flags.fuzzy = true,
            "--choseong" => flags.match_choseong = true,
            "--capturing" => flags.capturing = true,
            "--config" => {
                let path = args.next().ok_or("--config 뒤에 파일 경로가 필요합니다")?;
                config_path = Some(path);
            }
            "--" => {
                searches.extend(args.by_ref());
            }
            other if other.starts_with("--") => {
                return Err(format!("알 수 없는 옵션: {}", other));
            }
            _ => searches.push(arg),
        }
    }

    let mut options = config_path.map(load_options).unwrap_or_default();
    options.ignore_space |= flags.ignore_space;
    options.fuzzy |= flags.fuzzy;
    options.match_choseong |= flags.match_choseong;
    options.capturing |= flags.capturing;

    Ok(Some(Args { options, searches }))
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) if !args.searches.is_empty() => args,
        Ok(_) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    for search in &args.searches {
        match compile(search, &args.options) {
            Ok(pattern) => println!("{}", pattern),
            Err(e @ PatternError::ConfigConflict) => {
                eprintln!("옵션 오류: {}", e);
                return ExitCode::from(2);
            }
            Err(e) => {
                log::error!("패턴 생성 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let parsed = parse_args(args(&["--fuzzy", "--capturing", "가나"])).unwrap().unwrap();
        assert!(parsed.options.fuzzy);
        assert!(parsed.options.capturing);
        assert!(!parsed.options.ignore_space);
        assert_eq!(parsed.searches, vec!["가나".to_string()]);
    }

    #[test]
    fn test_parse_help() {
        assert!(parse_args(args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(parse_args(args(&["--nope"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn test_parse_double_dash() {
        let parsed = parse_args(args(&["--", "--fuzzy"])).unwrap().unwrap();
        assert!(!parsed.options.fuzzy);
        assert_eq!(parsed.searches, vec!["--fuzzy".to_string()]);
    }

    #[test]
    fn test_missing_config_falls_back() {
        let parsed = parse_args(args(&["--config", "/nonexistent/options.json", "--choseong", "ㄱ"]))
            .unwrap()
            .unwrap();
        assert!(parsed.options.match_choseong);
        assert!(!parsed.options.fuzzy);
    }
}
