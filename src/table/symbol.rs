//! 符号表

use std::collections::HashMap;

/// 声明类型，源语言只有整型一种
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum Mtype {
    Integer
}

/// 符号表项
#[derive(Eq, Hash, PartialEq, Debug)]
pub struct Mident {
    toks: String,
    mtp: Mtype
}

impl Mident {
    pub fn new(toks: String) -> Self {
        Self {
            toks,
            mtp: Mtype::Integer
        }
    }

    pub fn get_mtp(&self) -> Mtype {
        self.mtp
    }

    pub fn get_toks(&self) -> &String {
        &self.toks
    }
}

/// 全程序唯一的扁平符号表，随一次语义分析创建并随之丢弃
pub struct SymbolTable {
    idents: HashMap<String, Mident>
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            idents: HashMap::new()
        }
    }

    /// 登记声明，重复声明返回 false
    pub fn insert_ident(&mut self, ident: Mident) -> bool {
        if self.idents.contains_key(ident.get_toks()) {
            return false;
        }
        self.idents.insert(ident.get_toks().clone(), ident);
        true
    }

    pub fn contains_ident(&self, toks: &str) -> bool {
        self.idents.contains_key(toks)
    }

    pub fn get_ident(&self, toks: &str) -> Option<&Mident> {
        self.idents.get(toks)
    }

    pub fn dump(&self) -> String {
        let mut s = String::from("symbols: \n");
        for (toks, ident) in &self.idents {
            s.push_str(format!("{} : {:?}\n", toks, ident.get_mtp()).as_str());
        }
        s
    }
}
