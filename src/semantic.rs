//! 语义分析

pub mod analyzer;

/*

先声明后使用检查，使用扁平符号表（全程序唯一作用域，无遮蔽）

1. 声明段子树内出现的标识符全部登记入表，同名重复登记即报错
2. 声明段之外出现的标识符（赋值两侧、读写参数表、循环变量与上下界、算术操作数）
   在被检查时必须已在表中，否则报错
3. 遍历次序与文法结构一致：先处理声明段填表，再检查各语句；
   赋值语句两侧检查完后对右侧表达式再走一遍（只重复读，不重复登记）；
   循环语句检查完自身子树后再分别走下界、上界与循环体

只有整型一种类型，不做类型推导。检查过程不修改语法树，
首个违例即终止，符号表随本次分析结束一并丢弃。

 */
