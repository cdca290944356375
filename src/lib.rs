pub mod lex;
pub mod mistakes;
pub mod semantic;
pub mod syntax;
pub mod table;
pub mod translate;

#[cfg(test)]
mod pipeline_tests {
    use crate::lex::analysis::Analysis;
    use crate::semantic::analyzer::SemanticAnalyzer;
    use crate::syntax::ll_parser::PredictiveParser;
    use crate::translate::csharp_gen::CsGen;

    // 词法 -> 语法 -> 语义 -> 翻译，任一阶段失败即停止
    fn compile(src: &str) -> Result<String, String> {
        let analysis = Analysis::new("t.mp", src);
        let mut parser = PredictiveParser::new(analysis).map_err(|e| e.to_string())?;
        parser.parse().map_err(|e| e.to_string())?;
        SemanticAnalyzer::new(parser.get_ast()).analyze()?;
        Ok(CsGen::new(parser.get_ast()).translate())
    }

    #[test]
    fn test_assignment_program() {
        let out = compile("VAR x : INTEGER; BEGIN x = 5; END").unwrap();
        assert!(out.contains("int x;"));
        assert!(out.contains("x = 5;"));
    }

    #[test]
    fn test_undeclared_stops_pipeline() {
        let e = compile("VAR x : INTEGER; BEGIN y = 5; END").unwrap_err();
        assert!(e.contains('y'));
        assert!(e.contains("未声明"));
    }

    #[test]
    fn test_duplicate_stops_pipeline() {
        let e = compile("VAR x,x : INTEGER; BEGIN x = 1; END").unwrap_err();
        assert!(e.contains("已经声明"));
    }

    #[test]
    fn test_paren_expression_survives_round_trip() {
        let out = compile("VAR x : INTEGER; BEGIN x = (1 + 2) * 3; END").unwrap();
        assert!(out.contains("x = ( 1 + 2 ) * 3;"));
    }

    #[test]
    fn test_counting_loop() {
        let out = compile("VAR i : INTEGER; BEGIN FOR i = 0 TO 3 DO WRITE(i); ENDFOR END").unwrap();
        assert!(out.contains("for (i = 0; i <= 3; i++)"));
        assert!(out.contains("Console.WriteLine(i.ToString());"));
    }

    #[test]
    fn test_write_list_concatenation() {
        let out = compile("VAR x,y : INTEGER; BEGIN x = 1; y = 2; WRITE(x,y); END").unwrap();
        assert!(out.contains("Console.WriteLine(x.ToString() + \" \" + y.ToString());"));
    }

    #[test]
    fn test_unknown_char_stops_pipeline() {
        let e = compile("VAR x : INTEGER; BEGIN x = 5 @ END").unwrap_err();
        assert!(e.contains('@'));
    }

    #[test]
    fn test_repeated_runs_are_independent() {
        let src = "VAR x : INTEGER; BEGIN x = 5; END";
        assert_eq!(compile(src).unwrap(), compile(src).unwrap());
        // 一次失败的编译不影响后续编译
        assert!(compile("VAR x,x : INTEGER; BEGIN END").is_err());
        assert!(compile(src).is_ok());
    }
}
