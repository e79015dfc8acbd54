// read a reference file from tests/res into a string
#[allow(dead_code)]
pub fn read_res(name: &str) -> String {
    let path = format!("{}/tests/res/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap()
}

// read the lines of a reference file from tests/res
#[allow(dead_code)]
pub fn read_res_lines(name: &str) -> Vec<String> {
    read_res(name).lines().map(|l| l.to_string()).collect()
}
