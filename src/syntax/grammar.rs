//! LL(1) 预测分析表

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lex::TokenKind;

use super::NT;

/// 文法符号
#[derive(PartialEq, Debug, Clone)]
pub enum Sym {
    /// 终结符
    T(TokenKind),
    /// 非终结符
    NT(NT)
}

/// 产生式右部，空产生式为空序列
pub type Production = Vec<Sym>;

// 表由（非终结符，向前看词法类型）映射到唯一产生式
// 查不到即语法错误，查得到即唯一展开，构造时每个可达组合恰好一条
lazy_static! {
    pub static ref PREDICT: HashMap<(NT, TokenKind), Production> = {
        let mut r = HashMap::new();
        // 开始符号
        r.insert((NT::Minipas, TokenKind::Var),
            vec![Sym::NT(NT::DefineVar), Sym::NT(NT::ExecBlock)]);
        // 变量声明段
        r.insert((NT::DefineVar, TokenKind::Var),
            vec![Sym::T(TokenKind::Var), Sym::NT(NT::VarList), Sym::T(TokenKind::Colon), Sym::T(TokenKind::Integer), Sym::T(TokenKind::EndExp)]);
        r.insert((NT::VarList, TokenKind::Identity),
            vec![Sym::NT(NT::Ident), Sym::NT(NT::VarListE)]);
        r.insert((NT::VarListE, TokenKind::Comma),
            vec![Sym::T(TokenKind::Comma), Sym::NT(NT::VarList)]);
        r.insert((NT::VarListE, TokenKind::Colon), vec![]);
        // 语句块
        r.insert((NT::ExecBlock, TokenKind::Begin),
            vec![Sym::T(TokenKind::Begin), Sym::NT(NT::StmtList), Sym::T(TokenKind::End)]);
        r.insert((NT::StmtList, TokenKind::Identity),
            vec![Sym::NT(NT::ExecSentence), Sym::NT(NT::StmtListE)]);
        r.insert((NT::StmtList, TokenKind::Read),
            vec![Sym::NT(NT::ExecSentence), Sym::NT(NT::StmtListE)]);
        r.insert((NT::StmtList, TokenKind::Write),
            vec![Sym::NT(NT::ExecSentence), Sym::NT(NT::StmtListE)]);
        r.insert((NT::StmtList, TokenKind::For),
            vec![Sym::NT(NT::ExecSentence), Sym::NT(NT::StmtListE)]);
        r.insert((NT::StmtList, TokenKind::End), vec![]);
        r.insert((NT::StmtList, TokenKind::EndFor), vec![]);
        r.insert((NT::StmtListE, TokenKind::EndExp),
            vec![Sym::T(TokenKind::EndExp), Sym::NT(NT::StmtList)]);
        r.insert((NT::StmtListE, TokenKind::End), vec![]);
        r.insert((NT::StmtListE, TokenKind::EndFor), vec![]);
        // 语句
        r.insert((NT::ExecSentence, TokenKind::Identity), vec![Sym::NT(NT::ExecIs)]);
        r.insert((NT::ExecSentence, TokenKind::Read), vec![Sym::NT(NT::ExecRead)]);
        r.insert((NT::ExecSentence, TokenKind::Write), vec![Sym::NT(NT::ExecWrite)]);
        r.insert((NT::ExecSentence, TokenKind::For), vec![Sym::NT(NT::ExecFor)]);
        // 赋值语句
        r.insert((NT::ExecIs, TokenKind::Identity),
            vec![Sym::NT(NT::Ident), Sym::T(TokenKind::Is), Sym::NT(NT::ExecExp)]);
        // 表达式
        r.insert((NT::ExecExp, TokenKind::Minus),
            vec![Sym::NT(NT::SigOp), Sym::NT(NT::SubExp)]);
        r.insert((NT::ExecExp, TokenKind::LeftC), vec![Sym::NT(NT::SubExp)]);
        r.insert((NT::ExecExp, TokenKind::Identity), vec![Sym::NT(NT::SubExp)]);
        r.insert((NT::ExecExp, TokenKind::Const), vec![Sym::NT(NT::SubExp)]);
        r.insert((NT::SubExp, TokenKind::LeftC),
            vec![Sym::T(TokenKind::LeftC), Sym::NT(NT::ExecExp), Sym::T(TokenKind::RightC), Sym::NT(NT::SubExpE)]);
        r.insert((NT::SubExp, TokenKind::Identity),
            vec![Sym::NT(NT::Operand), Sym::NT(NT::SubExpE)]);
        r.insert((NT::SubExp, TokenKind::Const),
            vec![Sym::NT(NT::Operand), Sym::NT(NT::SubExpE)]);
        r.insert((NT::SubExpE, TokenKind::Plus),
            vec![Sym::NT(NT::BinOp), Sym::NT(NT::SubExp)]);
        r.insert((NT::SubExpE, TokenKind::Minus),
            vec![Sym::NT(NT::BinOp), Sym::NT(NT::SubExp)]);
        r.insert((NT::SubExpE, TokenKind::Mul),
            vec![Sym::NT(NT::BinOp), Sym::NT(NT::SubExp)]);
        r.insert((NT::SubExpE, TokenKind::EndExp), vec![]);
        r.insert((NT::SubExpE, TokenKind::RightC), vec![]);
        r.insert((NT::SubExpE, TokenKind::To), vec![]);
        r.insert((NT::SubExpE, TokenKind::Do), vec![]);
        r.insert((NT::SubExpE, TokenKind::End), vec![]);
        r.insert((NT::SubExpE, TokenKind::EndFor), vec![]);
        r.insert((NT::SigOp, TokenKind::Minus), vec![Sym::T(TokenKind::Minus)]);
        r.insert((NT::BinOp, TokenKind::Plus), vec![Sym::T(TokenKind::Plus)]);
        r.insert((NT::BinOp, TokenKind::Minus), vec![Sym::T(TokenKind::Minus)]);
        r.insert((NT::BinOp, TokenKind::Mul), vec![Sym::T(TokenKind::Mul)]);
        r.insert((NT::Operand, TokenKind::Identity), vec![Sym::NT(NT::Ident)]);
        r.insert((NT::Operand, TokenKind::Const), vec![Sym::NT(NT::Const)]);
        r.insert((NT::Ident, TokenKind::Identity), vec![Sym::T(TokenKind::Identity)]);
        r.insert((NT::Const, TokenKind::Const), vec![Sym::T(TokenKind::Const)]);
        // 读写语句
        r.insert((NT::ExecRead, TokenKind::Read),
            vec![Sym::T(TokenKind::Read), Sym::T(TokenKind::LeftC), Sym::NT(NT::IdentList), Sym::T(TokenKind::RightC)]);
        r.insert((NT::ExecWrite, TokenKind::Write),
            vec![Sym::T(TokenKind::Write), Sym::T(TokenKind::LeftC), Sym::NT(NT::IdentList), Sym::T(TokenKind::RightC)]);
        r.insert((NT::IdentList, TokenKind::Identity),
            vec![Sym::NT(NT::Ident), Sym::NT(NT::IdentListE)]);
        r.insert((NT::IdentListE, TokenKind::Comma),
            vec![Sym::T(TokenKind::Comma), Sym::NT(NT::IdentList)]);
        r.insert((NT::IdentListE, TokenKind::RightC), vec![]);
        // 计数循环
        r.insert((NT::ExecFor, TokenKind::For),
            vec![Sym::T(TokenKind::For), Sym::NT(NT::Ident), Sym::T(TokenKind::Is), Sym::NT(NT::ExecExp),
                 Sym::T(TokenKind::To), Sym::NT(NT::ExecExp), Sym::T(TokenKind::Do), Sym::NT(NT::StmtList), Sym::T(TokenKind::EndFor)]);
        r
    };
}

/// 查询预测分析表，查不到返回 None（即语法错误）
pub fn predict(nt: NT, look: TokenKind) -> Option<&'static Production> {
    (*PREDICT).get(&(nt, look))
}

#[cfg(test)]
mod grammar_tests {
    use super::*;

    #[test]
    fn test_hit_is_total() {
        let p = predict(NT::Minipas, TokenKind::Var).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p[0], Sym::NT(NT::DefineVar));
        assert_eq!(p[1], Sym::NT(NT::ExecBlock));
    }

    #[test]
    fn test_epsilon_is_empty() {
        assert!(predict(NT::VarListE, TokenKind::Colon).unwrap().is_empty());
        assert!(predict(NT::StmtList, TokenKind::End).unwrap().is_empty());
        assert!(predict(NT::SubExpE, TokenKind::To).unwrap().is_empty());
        assert!(predict(NT::IdentListE, TokenKind::RightC).unwrap().is_empty());
    }

    #[test]
    fn test_miss_is_error() {
        assert!(predict(NT::Minipas, TokenKind::Begin).is_none());
        assert!(predict(NT::ExecSentence, TokenKind::End).is_none());
        assert!(predict(NT::Operand, TokenKind::LeftC).is_none());
        // 语句列表尾不接受常数向前看
        assert!(predict(NT::StmtListE, TokenKind::Const).is_none());
    }

    #[test]
    fn test_paren_group_keeps_tail() {
        // 括号子表达式之后允许继续双目运算
        let p = predict(NT::SubExp, TokenKind::LeftC).unwrap();
        assert_eq!(p.last(), Some(&Sym::NT(NT::SubExpE)));
    }
}
