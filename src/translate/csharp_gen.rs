//! C# 代码生成

use id_tree::NodeId;

use crate::lex::Tokens;
use crate::syntax::{ASTNode, AST, NT};

/// 只为驱动分析存在的词法单元不进入生成结果
fn should_include(tok: &Tokens) -> bool {
    !matches!(
        tok,
        Tokens::Var | Tokens::Integer | Tokens::Begin | Tokens::End | Tokens::Colon | Tokens::EndExp
    )
}

pub struct CsGen<'a> {
    ast: &'a AST,
    output: String,
}

impl<'a> CsGen<'a> {
    pub fn new(ast: &'a AST) -> CsGen<'a> {
        CsGen {
            ast,
            output: String::new(),
        }
    }

    /// 生成 C# 源文本，假定语义检查已经通过
    pub fn translate(&mut self) -> String {
        self.output.clear();
        let root = self.ast.root_node_id().unwrap().clone();
        self.traverse_node(&root);
        self.output.clone()
    }

    fn children_of(&self, node: &NodeId) -> Vec<NodeId> {
        self.ast.get(node).unwrap().children().to_vec()
    }

    /// 结点上挂的词法单元文本，用于 Ident / Const / 运算符结点
    fn leaf_text(&self, node: &NodeId) -> String {
        let children = self.children_of(node);
        match self.ast.get(&children[0]).unwrap().data() {
            ASTNode::T(tok) => tok.text().to_string(),
            ASTNode::NT(_) => String::new(),
        }
    }

    fn traverse_node(&mut self, node: &NodeId) {
        match self.ast.get(node).unwrap().data().clone() {
            ASTNode::NT(nt) => match nt {
                NT::Minipas => {
                    self.output.push_str("public class Program\n{\n    public static void Main()\n    {\n");
                    self.traverse_children(node);
                    self.output.push_str("    }\n}\n");
                }
                NT::DefineVar => {
                    self.output.push_str("int ");
                    self.traverse_children(node);
                    self.output.push_str(";\n");
                }
                NT::ExecIs => {
                    let children = self.children_of(node);
                    self.traverse_node(&children[0]);
                    self.output.push_str(" = ");
                    self.traverse_node(&children[2]);
                    self.output.push_str(";\n");
                }
                NT::ExecRead => {
                    let children = self.children_of(node);
                    self.traverse_read(&children[2]);
                }
                NT::ExecWrite => {
                    let children = self.children_of(node);
                    self.output.push_str("Console.WriteLine(");
                    self.traverse_stringify(&children[2]);
                    self.output.push_str(");\n");
                }
                NT::ExecFor => {
                    let children = self.children_of(node);
                    self.output.push_str("for (");
                    self.traverse_node(&children[1]);
                    self.output.push_str(" = ");
                    self.traverse_node(&children[3]);
                    self.output.push_str("; ");
                    self.traverse_node(&children[1]);
                    self.output.push_str(" <= ");
                    self.traverse_node(&children[5]);
                    self.output.push_str("; ");
                    self.traverse_node(&children[1]);
                    self.output.push_str("++)\n{\n");
                    self.traverse_node(&children[7]);
                    self.output.push_str("}\n");
                }
                NT::SubExp => {
                    let children = self.children_of(node);
                    match self.ast.get(&children[0]).unwrap().data().clone() {
                        // 括号子表达式输出字面括号
                        ASTNode::T(Tokens::LeftC) => {
                            self.output.push_str("( ");
                            self.traverse_node(&children[1]);
                            self.output.push_str(" )");
                            self.traverse_node(&children[3]);
                        }
                        _ => self.traverse_children(node),
                    }
                }
                NT::SubExpE => {
                    let children = self.children_of(node);
                    if !children.is_empty() {
                        self.output.push(' ');
                        self.traverse_node(&children[0]);
                        self.output.push(' ');
                        self.traverse_node(&children[1]);
                    }
                }
                NT::Ident | NT::Const | NT::BinOp | NT::SigOp => {
                    let text = self.leaf_text(node);
                    self.output.push_str(&text);
                }
                NT::VarList
                | NT::VarListE
                | NT::ExecBlock
                | NT::StmtList
                | NT::StmtListE
                | NT::ExecSentence
                | NT::ExecExp
                | NT::Operand
                | NT::IdentList
                | NT::IdentListE => self.traverse_children(node),
            },
            ASTNode::T(tok) => {
                if should_include(&tok) {
                    self.output.push_str(tok.text());
                }
            }
        }
    }

    fn traverse_children(&mut self, node: &NodeId) {
        for child in self.children_of(node) {
            self.traverse_node(&child);
        }
    }

    /// 读语句：标识符表内每个标识符生成一条读入赋值语句
    fn traverse_read(&mut self, node: &NodeId) {
        match self.ast.get(node).unwrap().data().clone() {
            ASTNode::NT(NT::Ident) => {
                let text = self.leaf_text(node);
                self.output.push_str(&text);
                self.output.push_str(" = int.Parse(Console.ReadLine());\n");
            }
            ASTNode::NT(_) => {
                for child in self.children_of(node) {
                    self.traverse_read(&child);
                }
            }
            ASTNode::T(_) => (),
        }
    }

    /// 写语句专用的字符串化遍历：标识符变为其文本表示，
    /// 分隔逗号改写为带单个空格字面量的连接运算，其余一律不输出
    fn traverse_stringify(&mut self, node: &NodeId) {
        match self.ast.get(node).unwrap().data().clone() {
            ASTNode::NT(NT::Ident) => {
                let text = self.leaf_text(node);
                self.output.push_str(&text);
                self.output.push_str(".ToString()");
            }
            ASTNode::NT(_) => {
                for child in self.children_of(node) {
                    self.traverse_stringify(&child);
                }
            }
            ASTNode::T(Tokens::Comma) => {
                self.output.push_str(" + \" \" + ");
            }
            ASTNode::T(_) => (),
        }
    }
}
