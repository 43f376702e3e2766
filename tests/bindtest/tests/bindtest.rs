use bindtest::test_run;
use libtest_mimic::{Arguments, Trial};

fn main() {
    const CASE_PATTERN: &str = "../cases/**/*.json";

    let args = Arguments::from_args();
    let mut tests = vec![];

    let case_files = glob::glob(CASE_PATTERN).expect("failed to find case files");
    for case_file in case_files {
        let filepath = case_file.expect("failed to read case file");
        let filename = filepath
            .file_stem()
            .expect("failed to get file name")
            .to_str()
            .unwrap()
            .to_string();
        let filepath = filepath.to_str().unwrap().to_string();

        let test = Trial::test(filename, move || {
            test_run(filepath.as_str())?;
            Ok(())
        });

        tests.push(test);
    }

    libtest_mimic::run(&args, tests).exit();
}
