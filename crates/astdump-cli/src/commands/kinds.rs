use astdump_lib::NodeKind;

pub fn run() {
    print!("{}", list_kinds());
}

/// `<Kind>\t<tag>` for every supported kind.
pub fn list_kinds() -> String {
    NodeKind::ALL
        .iter()
        .map(|kind| format!("{}\t{}\n", kind.name(), kind.tag()))
        .collect()
}
