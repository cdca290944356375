//! 语法分析

pub mod grammar;
pub mod ll_parser;

use std::fmt::Debug;

use id_tree::Tree;
use id_tree_layout::Visualize;

use crate::lex::Tokens;

// 基于预测分析表的 LL(1) 文法
// 源语言：整型变量、赋值、控制台读写、计数循环、算术表达式（单目取负、双目 + - *、括号）
// 最终输出是带全部推导结构的具体语法树，语义分析和翻译阶段只读该树
// Tokens 枚举为终结符，其余均为非终结符

/*

开始符号为 Minipas
源程序由一个变量声明段和一个语句块组成
Minipas -> DefineVar ExecBlock

First(Minipas) = {Tokens::Var}

Follow(Minipas) = {Tokens::Eof}

*/

/* 变量声明段

声明段内的标识符之间必须都通过逗号进行分割，整个段以 INTEGER 类型标注结尾
DefineVar -> Tokens::Var VarList Tokens::Colon Tokens::Integer Tokens::EndExp
VarList -> Ident VarListE
VarListE -> Tokens::Comma VarList | Tokens::Null

First(DefineVar) = {Tokens::Var}
First(VarList) = {Tokens::Identity}
First(VarListE) = {Tokens::Comma, Tokens::Null}

Follow(DefineVar) = {Tokens::Begin}
Follow(VarList) = {Tokens::Colon}
Follow(VarListE) = {Tokens::Colon}

*/

/* 语句块

语句之间以 ; 分割，块内语句可以为空
ExecBlock -> Tokens::Begin StmtList Tokens::End
StmtList -> ExecSentence StmtListE | Tokens::Null
StmtListE -> Tokens::EndExp StmtList | Tokens::Null

语句为赋值 / 读 / 写 / 计数循环之一
ExecSentence -> ExecIs | ExecRead | ExecWrite | ExecFor

First(ExecBlock) = {Tokens::Begin}
First(StmtList) = {Tokens::Identity, Tokens::Read, Tokens::Write, Tokens::For, Tokens::Null}
First(StmtListE) = {Tokens::EndExp, Tokens::Null}
First(ExecSentence) = {Tokens::Identity, Tokens::Read, Tokens::Write, Tokens::For}

Follow(ExecBlock) = {Tokens::Eof}
Follow(StmtList) = {Tokens::End, Tokens::EndFor}
Follow(StmtListE) = {Tokens::End, Tokens::EndFor}
Follow(ExecSentence) = {Tokens::EndExp, Tokens::End, Tokens::EndFor}

*/

/* 赋值语句与表达式

ExecIs -> Ident Tokens::Is ExecExp

表达式为双目运算符连接的操作数串，可带一个前导单目取负，支持完整括号嵌套
ExecExp -> SigOp SubExp | SubExp
SubExp -> Tokens::LeftC ExecExp Tokens::RightC SubExpE | Operand SubExpE
SubExpE -> BinOp SubExp | Tokens::Null
SigOp -> Tokens::Minus
BinOp -> Tokens::Plus | Tokens::Minus | Tokens::Mul
Operand -> Ident | Const
Ident -> Tokens::Identity
Const -> Tokens::Const

First(ExecIs) = {Tokens::Identity}
First(ExecExp) = {Tokens::Minus, Tokens::LeftC, Tokens::Identity, Tokens::Const}
First(SubExp) = {Tokens::LeftC, Tokens::Identity, Tokens::Const}
First(SubExpE) = {Tokens::Plus, Tokens::Minus, Tokens::Mul, Tokens::Null}
First(SigOp) = {Tokens::Minus}
First(BinOp) = {Tokens::Plus, Tokens::Minus, Tokens::Mul}
First(Operand) = {Tokens::Identity, Tokens::Const}
First(Ident) = {Tokens::Identity}
First(Const) = {Tokens::Const}

Follow(ExecIs) = {Tokens::EndExp, Tokens::End, Tokens::EndFor}
Follow(ExecExp) = {Tokens::EndExp, Tokens::RightC, Tokens::To, Tokens::Do, Tokens::End, Tokens::EndFor}
Follow(SubExp) = {Tokens::EndExp, Tokens::RightC, Tokens::To, Tokens::Do, Tokens::End, Tokens::EndFor}
Follow(SubExpE) = {Tokens::EndExp, Tokens::RightC, Tokens::To, Tokens::Do, Tokens::End, Tokens::EndFor}
Follow(SigOp) = {Tokens::LeftC, Tokens::Identity, Tokens::Const}
Follow(BinOp) = {Tokens::LeftC, Tokens::Identity, Tokens::Const}
Follow(Operand) = {Tokens::Plus, Tokens::Minus, Tokens::Mul, Tokens::EndExp, Tokens::RightC, Tokens::To, Tokens::Do, Tokens::End, Tokens::EndFor}

*/

/* 读写语句

ExecRead -> Tokens::Read Tokens::LeftC IdentList Tokens::RightC
ExecWrite -> Tokens::Write Tokens::LeftC IdentList Tokens::RightC
IdentList -> Ident IdentListE
IdentListE -> Tokens::Comma IdentList | Tokens::Null

First(ExecRead) = {Tokens::Read}
First(ExecWrite) = {Tokens::Write}
First(IdentList) = {Tokens::Identity}
First(IdentListE) = {Tokens::Comma, Tokens::Null}

Follow(ExecRead) = {Tokens::EndExp, Tokens::End, Tokens::EndFor}
Follow(ExecWrite) = {Tokens::EndExp, Tokens::End, Tokens::EndFor}
Follow(IdentList) = {Tokens::RightC}
Follow(IdentListE) = {Tokens::RightC}

*/

/* 计数循环

循环变量从下界逐一递增计数到上界
ExecFor -> Tokens::For Ident Tokens::Is ExecExp Tokens::To ExecExp Tokens::Do StmtList Tokens::EndFor

First(ExecFor) = {Tokens::For}

Follow(ExecFor) = {Tokens::EndExp, Tokens::End, Tokens::EndFor}

*/

/// 语法树
pub type AST = Tree<ASTNode>;

/// 非终结符
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum NT {
    // 开始符号
    Minipas,
    // 变量声明段
    DefineVar,
    VarList,
    VarListE,
    // 语句块
    ExecBlock,
    StmtList,
    StmtListE,
    // 语句
    ExecSentence,
    // 赋值语句
    ExecIs,
    // 表达式
    ExecExp,
    SubExp,
    SubExpE,
    SigOp,
    BinOp,
    Operand,
    Ident,
    Const,
    // 读写语句
    ExecRead,
    ExecWrite,
    IdentList,
    IdentListE,
    // 计数循环
    ExecFor
}

/// 语法树结点
#[derive(Debug, PartialEq, Clone)]
pub enum ASTNode {
    /// 终结符
    T(Tokens),
    /// 非终结符
    NT(NT)
}

impl Visualize for ASTNode {
    fn visualize(&self) -> String {
        match self {
            ASTNode::T(t) => format!("{:?}", t),
            ASTNode::NT(nt) => format!("{:?}", nt)
        }
    }

    fn emphasize(&self) -> bool {
        match self {
            ASTNode::T(_) => true,
            ASTNode::NT(_) => false
        }
    }
}
