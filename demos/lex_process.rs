//! 词法分析演示 - 输出样例源程序的全部词法单元

use std::fs::File;

use Minipas::lex::analysis::Analysis;
use Minipas::lex::preprocessor::preprocessor;

fn dump(name: &str) {
    let mut path = std::env::current_dir().unwrap();
    path.push(name);
    let file = File::open(path).unwrap();
    let s = preprocessor(&file);
    let analysis = Analysis::new(name, &s);
    analysis.for_each(|x| println!("{}", x.dump()));
}

fn main() {
    dump("demos/sources/s1.mp");
    dump("demos/sources/s2.mp");
}
