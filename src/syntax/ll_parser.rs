//! LL(1) 预测分析，表驱动下降

use id_tree::InsertBehavior::AsRoot;
use id_tree::InsertBehavior::UnderNode;
use id_tree::LevelOrderTraversal;
use id_tree::PostOrderTraversal;
use id_tree::PreOrderTraversal;
use id_tree::{Node, NodeId};

use crate::lex::analysis::Analysis;
use crate::lex::Tokens;
use crate::mistakes::show::{Froms, Mis, Types};

use super::grammar::{self, Sym};
use super::ASTNode;
use super::{AST, NT};

macro_rules! insert_t {
    ($tree: expr, $root: expr, $tok: expr) => {
        $tree.insert(Node::new(ASTNode::T($tok)), UnderNode(&$root)).unwrap()
    };
}

macro_rules! insert_nt {
    ($tree: expr, $root: expr, $type: expr) => {
        $tree.insert(Node::new(ASTNode::NT($type)), UnderNode(&$root)).unwrap()
    };
}

#[derive(Debug)]
pub struct PredictiveParser {
    // 词法单元流，尾部恒为 Eof 哨兵
    tokens: Vec<Tokens>,
    // 当前分析词法索引，只增不减
    current: usize,
    tree: AST,
    file: String,
}

impl PredictiveParser {
    pub fn new(mut lexer: Analysis) -> Result<PredictiveParser, Mis> {
        let file = lexer.get_file().to_string();
        let mut tree = AST::new();
        let root: Node<ASTNode> = Node::new(ASTNode::NT(NT::Minipas));
        tree.insert(root, AsRoot).unwrap();
        let mut tokens: Vec<Tokens> = Vec::new();
        loop {
            match lexer.next_token()? {
                Tokens::Eof => break,
                t => tokens.push(t),
            }
        }
        tokens.push(Tokens::Eof);
        Ok(PredictiveParser {
            tokens,
            current: 0,
            tree,
            file,
        })
    }

    pub fn dump(&self) -> String {
        let mut s = String::new();
        self.tree.write_formatted(&mut s).unwrap();
        s
    }

    /// 前序遍历生成
    pub fn ast_pre_order(&self) -> PreOrderTraversal<ASTNode> {
        let id = &self.root_id();
        self.tree.traverse_pre_order(id).unwrap()
    }

    pub fn ast_post_order(&self) -> PostOrderTraversal<ASTNode> {
        let id = &self.root_id();
        self.tree.traverse_post_order(id).unwrap()
    }

    pub fn ast_level_order(&self) -> LevelOrderTraversal<ASTNode> {
        let id = &self.root_id();
        self.tree.traverse_level_order(id).unwrap()
    }

    pub fn get_ast(&self) -> &AST {
        &self.tree
    }

    pub fn get_tokens(&self) -> &Vec<Tokens> {
        &self.tokens
    }

    /// 返回语法树头节点索引
    pub fn root_id(&self) -> NodeId {
        self.tree.root_node_id().unwrap().clone()
    }

    pub fn parse(&mut self) -> Result<(), Mis> {
        let id = self.root_id();
        self.expand(NT::Minipas, &id)?;
        // 开始符号展开完毕后只允许剩下 Eof 哨兵
        if self.tokens[self.current] != Tokens::Eof {
            return Err(Mis::new(
                Froms::Syntax,
                Types::Error,
                format!(
                    "程序结束后存在多余的词法单元：{:?}，位置: {}",
                    self.tokens[self.current], self.current
                )
                .as_str(),
                &self.file,
                None,
            ));
        }
        Ok(())
    }

    /// 按预测分析表展开非终结符 nt，root 为其对应的树节点
    fn expand(&mut self, nt: NT, root: &NodeId) -> Result<(), Mis> {
        let look = self.tokens[self.current].kind();
        let prod = match grammar::predict(nt, look) {
            Some(x) => x,
            None => {
                return Err(Mis::new(
                    Froms::Syntax,
                    Types::Error,
                    format!(
                        "非终结符 {:?} 无法展开，目前词法单元：{:?}，位置: {}",
                        nt, self.tokens[self.current], self.current
                    )
                    .as_str(),
                    &self.file,
                    None,
                ));
            }
        };
        for sym in prod {
            match sym {
                // 产生式中的终结符与当前词法单元的匹配由表的构造保证
                Sym::T(_) => {
                    let tok = self.tokens[self.current].clone();
                    insert_t!(self.tree, root, tok);
                    self.next();
                }
                Sym::NT(sub) => {
                    let me = insert_nt!(self.tree, root, *sub);
                    self.expand(*sub, &me)?;
                }
            }
        }
        Ok(())
    }

    fn next(&mut self) {
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod ll_parser_tests {
    use id_tree_layout::Visualize;

    use super::*;

    macro_rules! ll_parser_test_macro {
        ($src:expr, $test:expr) => {
            let analysis = Analysis::new("t.mp", $src);
            let mut parser = PredictiveParser::new(analysis).unwrap();
            let r = parser.parse();
            if $test {
                assert!(r.is_ok(), "{}", r.unwrap_err());
            } else {
                assert!(r.is_err());
            }
        };
    }

    #[test]
    fn test_minimal_program() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN x = 5; END", true);
    }

    #[test]
    fn test_empty_stmt_list() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN END", true);
    }

    #[test]
    fn test_no_trailing_semicolon() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN x = 5 END", true);
    }

    #[test]
    fn test_paren_expression() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN x = (1 + 2) * 3; END", true);
    }

    #[test]
    fn test_nested_parens_and_unary() {
        ll_parser_test_macro!("VAR x,y : INTEGER; BEGIN x = -1 + ((y - 2) * x); END", true);
    }

    #[test]
    fn test_for_loop() {
        ll_parser_test_macro!(
            "VAR i : INTEGER; BEGIN FOR i = 0 TO 3 DO WRITE(i); ENDFOR END",
            true
        );
    }

    #[test]
    fn test_read_write_lists() {
        ll_parser_test_macro!("VAR x,y : INTEGER; BEGIN READ(x,y); WRITE(x,y); END", true);
    }

    #[test]
    fn test_missing_begin() {
        ll_parser_test_macro!("VAR x : INTEGER; x = 5; END", false);
    }

    #[test]
    fn test_missing_expression() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN x = ; END", false);
    }

    #[test]
    fn test_missing_declaration() {
        ll_parser_test_macro!("BEGIN x = 5; END", false);
    }

    #[test]
    fn test_trailing_tokens() {
        ll_parser_test_macro!("VAR x : INTEGER; BEGIN END END", false);
    }

    #[test]
    fn test_unexpected_for_bounds() {
        ll_parser_test_macro!("VAR i : INTEGER; BEGIN FOR i = 0 DO WRITE(i); ENDFOR END", false);
    }

    #[test]
    fn test_error_names_nonterminal_and_token() {
        let analysis = Analysis::new("t.mp", "VAR x : INTEGER; BEGIN x = ; END");
        let mut parser = PredictiveParser::new(analysis).unwrap();
        let e = parser.parse().unwrap_err();
        assert_eq!(*e.get_who(), Froms::Syntax);
        assert!(e.get_intro().contains("ExecExp"));
        assert!(e.get_intro().contains("EndExp"));
    }

    #[test]
    fn test_deterministic_tree() {
        let src = "VAR x,y : INTEGER; BEGIN x = (1 + 2) * 3; WRITE(x,y); END";
        let mut first = PredictiveParser::new(Analysis::new("t.mp", src)).unwrap();
        let mut second = PredictiveParser::new(Analysis::new("t.mp", src)).unwrap();
        first.parse().unwrap();
        second.parse().unwrap();
        assert_eq!(first.dump(), second.dump());
    }

    #[test]
    fn test_pre_order_shape() {
        let src = "VAR x : INTEGER; BEGIN x = 5 END";
        let mut parser = PredictiveParser::new(Analysis::new("t.mp", src)).unwrap();
        parser.parse().unwrap();
        let shape: Vec<String> = parser.ast_pre_order().map(|x| x.data().visualize()).collect();
        let expect = vec![
            "Minipas",
            "DefineVar",
            "Var",
            "VarList",
            "Ident",
            "Identity(\"x\")",
            "VarListE",
            "Colon",
            "Integer",
            "EndExp",
            "ExecBlock",
            "Begin",
            "StmtList",
            "ExecSentence",
            "ExecIs",
            "Ident",
            "Identity(\"x\")",
            "Is",
            "ExecExp",
            "SubExp",
            "Operand",
            "Const",
            "Const(\"5\")",
            "SubExpE",
            "StmtListE",
            "End",
        ];
        assert_eq!(shape, expect);
    }

    #[test]
    fn test_lex_error_propagates() {
        let analysis = Analysis::new("t.mp", "VAR x @ INTEGER;");
        let r = PredictiveParser::new(analysis);
        assert!(r.is_err());
        assert_eq!(*r.unwrap_err().get_who(), Froms::Lex);
    }
}
