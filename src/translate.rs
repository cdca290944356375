//! 翻译生成

pub mod csharp_gen;

/*

语法制导翻译方案，对通过语义检查的语法树做一次前序遍历，
按结点类别拼接 C# 源文本：

Minipas -> 固定的 Program 类与 Main 入口包装
DefineVar -> int a,b,...;（逗号原样传递，一条声明语句）
ExecIs -> 标识符 = 表达式;
ExecRead -> 每个标识符一条 x = int.Parse(Console.ReadLine());
ExecWrite -> Console.WriteLine(...)，参数为各标识符字符串化后
             以单个空格字面量连接（逗号改写为 + " " +，不传参数列表）
ExecFor -> for (i = 下界; i <= 上界; i++) { 循环体 }，
           循环变量只赋值，不重复声明
表达式 -> 操作数与运算符按树序输出，单个空格分隔，
          括号子表达式输出字面括号

只为驱动分析存在的结构性关键字、语句分隔符与类型标注冒号一律不输出。
WRITE 的字符串化走一条独立命名的遍历，避免其规则泄漏到其他上下文。

 */
