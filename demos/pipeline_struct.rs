//! 编译流水线总体结构设计

use std::env;

use graphviz_rust::cmd::CommandArg;
use graphviz_rust::cmd::Format;
use graphviz_rust::dot_generator::*;
use graphviz_rust::dot_structures::*;
use graphviz_rust::exec;
use graphviz_rust::printer::PrinterContext;

fn main() {
    // 总体结构设计生成
    let s = graph!(strict di id!("s");
        node!("m"; attr!("label", "mistake"), attr!("shape", "record"), attr!("color", "green")),
        node!("l"; attr!("label", "lex"), attr!("shape", "record"), attr!("color", "blue")),
        node!("p"; attr!("label", "parser"), attr!("shape", "record"), attr!("color", "red")),
        node!("g"; attr!("label", "grammar"), attr!("shape", "ellipse")),
        node!("a"; attr!("label", "analyzer"), attr!("shape", "record"), attr!("color", "purple")),
        node!("t"; attr!("label", "translate"), attr!("shape", "record"), attr!("color", "orange")),
        edge!(node_id!("l") => node_id!("p") => node_id!("a") => node_id!("t"); attr!("arrowhead", "halfopen")),
        edge!(node_id!("g") => node_id!("p"); attr!("arrowhead", "obox"), attr!("label", "predict")),
        edge!(node_id!("l") => node_id!("m"); attr!("arrowhead", "none")),
        edge!(node_id!("p") => node_id!("m"); attr!("arrowhead", "none"))
    );
    let mut path = env::current_dir().unwrap();
    path.push("demos/tests/pipeline_struct.png");
    let mut ctx = PrinterContext::default();
    ctx.always_inline();
    exec(
        s,
        &mut ctx,
        vec![
            CommandArg::Format(Format::Png),
            CommandArg::Output(path.to_str().unwrap().to_string()),
        ],
    )
    .unwrap();
}
