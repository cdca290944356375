//! 先声明后使用检查

use id_tree::NodeId;

use crate::lex::Tokens;
use crate::syntax::{ASTNode, AST, NT};
use crate::table::symbol::{Mident, SymbolTable};

pub struct SemanticAnalyzer<'a> {
    ast: &'a AST,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(ast: &'a AST) -> SemanticAnalyzer<'a> {
        SemanticAnalyzer { ast }
    }

    /// 对整棵语法树做先声明后使用检查，检查到首个违例即返回
    pub fn analyze(&self) -> Result<(), String> {
        // 符号表每次分析新建，分析结束即丢弃
        let mut symbols = SymbolTable::new();
        let root = self.ast.root_node_id().unwrap().clone();
        self.traverse_node(&root, &mut symbols)
    }

    fn children_of(&self, node: &NodeId) -> Vec<NodeId> {
        self.ast.get(node).unwrap().children().to_vec()
    }

    fn traverse_node(&self, node: &NodeId, symbols: &mut SymbolTable) -> Result<(), String> {
        match self.ast.get(node).unwrap().data() {
            ASTNode::NT(nt) => match nt {
                NT::DefineVar => self.add_sub_idents(node, symbols),
                NT::ExecIs => {
                    self.check_sub_tree(node, symbols)?;
                    // 右侧表达式再走一遍，只重复读
                    let children = self.children_of(node);
                    self.traverse_node(&children[2], symbols)
                }
                NT::ExecRead | NT::ExecWrite => self.check_sub_tree(node, symbols),
                NT::ExecFor => {
                    self.check_sub_tree(node, symbols)?;
                    let children = self.children_of(node);
                    // 循环下界
                    self.traverse_node(&children[3], symbols)?;
                    // 循环上界
                    self.traverse_node(&children[5], symbols)?;
                    // 循环体
                    self.traverse_node(&children[7], symbols)
                }
                NT::Minipas
                | NT::VarList
                | NT::VarListE
                | NT::ExecBlock
                | NT::StmtList
                | NT::StmtListE
                | NT::ExecSentence
                | NT::ExecExp
                | NT::SubExp
                | NT::SubExpE
                | NT::SigOp
                | NT::BinOp
                | NT::Operand
                | NT::Ident
                | NT::Const
                | NT::IdentList
                | NT::IdentListE => self.traverse_children(node, symbols),
            },
            ASTNode::T(_) => Ok(()),
        }
    }

    /// 声明段子树内的标识符全部登记入表
    fn add_sub_idents(&self, node: &NodeId, symbols: &mut SymbolTable) -> Result<(), String> {
        for child in self.children_of(node) {
            if let ASTNode::T(Tokens::Identity(name)) = self.ast.get(&child).unwrap().data() {
                if !symbols.insert_ident(Mident::new(name.clone())) {
                    return Err(format!("变量 {} 已经声明", name));
                }
            }
            self.add_sub_idents(&child, symbols)?;
        }
        Ok(())
    }

    /// 检查子树内全部标识符是否已声明
    fn check_sub_tree(&self, node: &NodeId, symbols: &mut SymbolTable) -> Result<(), String> {
        for child in self.children_of(node) {
            self.check_ident(&child, symbols)?;
            self.check_sub_tree(&child, symbols)?;
        }
        Ok(())
    }

    fn check_ident(&self, node: &NodeId, symbols: &SymbolTable) -> Result<(), String> {
        if let ASTNode::T(Tokens::Identity(name)) = self.ast.get(node).unwrap().data() {
            if !symbols.contains_ident(name) {
                return Err(format!("变量 {} 未声明", name));
            }
        }
        Ok(())
    }

    fn traverse_children(&self, node: &NodeId, symbols: &mut SymbolTable) -> Result<(), String> {
        for child in self.children_of(node) {
            self.traverse_node(&child, symbols)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod analyzer_tests {
    use crate::lex::analysis::Analysis;
    use crate::syntax::ll_parser::PredictiveParser;

    use super::*;

    macro_rules! analyze_test_macro {
        ($src:expr) => {{
            let analysis = Analysis::new("t.mp", $src);
            let mut parser = PredictiveParser::new(analysis).unwrap();
            parser.parse().unwrap();
            SemanticAnalyzer::new(parser.get_ast()).analyze()
        }};
    }

    #[test]
    fn test_declared_assignment_passes() {
        assert!(analyze_test_macro!("VAR x : INTEGER; BEGIN x = 5; END").is_ok());
    }

    #[test]
    fn test_undeclared_assignment() {
        let e = analyze_test_macro!("VAR x : INTEGER; BEGIN y = 5; END").unwrap_err();
        assert!(e.contains('y'));
        assert!(e.contains("未声明"));
    }

    #[test]
    fn test_duplicate_declaration() {
        let e = analyze_test_macro!("VAR x,x : INTEGER; BEGIN x = 1; END").unwrap_err();
        assert!(e.contains('x'));
        assert!(e.contains("已经声明"));
    }

    #[test]
    fn test_undeclared_in_expression() {
        let e = analyze_test_macro!("VAR x : INTEGER; BEGIN x = x + z; END").unwrap_err();
        assert!(e.contains('z'));
    }

    #[test]
    fn test_undeclared_loop_counter() {
        let e = analyze_test_macro!(
            "VAR x : INTEGER; BEGIN FOR i = 0 TO 3 DO WRITE(x); ENDFOR END"
        )
        .unwrap_err();
        assert!(e.contains('i'));
    }

    #[test]
    fn test_undeclared_in_loop_body() {
        let e = analyze_test_macro!(
            "VAR i : INTEGER; BEGIN FOR i = 0 TO 3 DO WRITE(k); ENDFOR END"
        )
        .unwrap_err();
        assert!(e.contains('k'));
    }

    #[test]
    fn test_undeclared_read_write() {
        assert!(analyze_test_macro!("VAR x : INTEGER; BEGIN READ(q); END").is_err());
        assert!(analyze_test_macro!("VAR x : INTEGER; BEGIN WRITE(q); END").is_err());
    }

    #[test]
    fn test_full_program_passes() {
        let r = analyze_test_macro!(
            "VAR x,y,i : INTEGER; BEGIN READ(x); y = (x + 1) * 2; FOR i = 0 TO y DO WRITE(i,x); ENDFOR END"
        );
        assert!(r.is_ok(), "{}", r.unwrap_err());
    }

    #[test]
    fn test_tree_unchanged_by_analysis() {
        let analysis = Analysis::new("t.mp", "VAR x : INTEGER; BEGIN x = 5; END");
        let mut parser = PredictiveParser::new(analysis).unwrap();
        parser.parse().unwrap();
        let before = parser.dump();
        SemanticAnalyzer::new(parser.get_ast()).analyze().unwrap();
        assert_eq!(before, parser.dump());
    }
}
