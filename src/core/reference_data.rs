// Built-in copies of the Correios service list and the ISO 3166-1 country names.

pub(crate) static SERVICES: &[(&str, &str)] = &[
    ("AL", "AGENTES DE LEITURA"),
    ("AR", "AVISO DE RECEBIMENTO"),
    ("CA", "OBJETO INTERNACIONAL"),
    ("CC", "COLIS POSTAUX"),
    ("CD", "OBJETO INTERNACIONAL"),
    ("CE", "OBJETO INTERNACIONAL"),
    ("CG", "OBJETO INTERNACIONAL"),
    ("CJ", "REGISTRADO INTERNACIONAL"),
    ("CK", "OBJETO INTERNACIONAL"),
    ("CL", "OBJETO INTERNACIONAL"),
    ("CP", "COLIS POSTAUX"),
    ("CR", "CARTA REGISTRADA SEM VALOR DECLARADO"),
    ("CS", "OBJETO INTERNACIONAL"),
    ("CT", "OBJETO INTERNACIONAL"),
    ("CV", "REGISTRADO INTERNACIONAL"),
    ("CY", "OBJETO INTERNACIONAL"),
    ("DA", "REM EXPRES COM AR DIGITAL"),
    ("DB", "REM EXPRES COM AR DIGITAL BRADESCO"),
    ("DC", "REM EXPRESSA CRLV/CRV/CNH e NOTIFICAÇÃO"),
    ("DD", "DEVOLUÇÃO DE DOCUMENTOS"),
    ("DE", "REMESSA EXPRESSA TALÃO E CARTÃO C/ AR"),
    ("DI", "REM EXPRES COM AR DIGITAL ITAU"),
    ("DP", "REM EXPRES COM AR DIGITAL PRF"),
    ("DS", "REM EXPRES COM AR DIGITAL SANTANDER"),
    ("DT", "REMESSA ECON.SEG.TRANSITO C/AR DIGITAL"),
    ("EA", "OBJETO INTERNACIONAL"),
    ("EB", "OBJETO INTERNACIONAL"),
    ("EC", "ENCOMENDA PAC"),
    ("ED", "OBJETO INTERNACIONAL"),
    ("EE", "SEDEX INTERNACIONAL"),
    ("EF", "OBJETO INTERNACIONAL"),
    ("EG", "OBJETO INTERNACIONAL"),
    ("EH", "ENCOMENDA NORMAL COM AR DIGITAL"),
    ("EI", "OBJETO INTERNACIONAL"),
    ("EJ", "ENCOMENDA INTERNACIONAL"),
    ("EK", "OBJETO INTERNACIONAL"),
    ("EL", "OBJETO INTERNACIONAL"),
    ("EM", "OBJETO INTERNACIONAL"),
    ("EN", "ENCOMENDA NORMAL NACIONAL"),
    ("EP", "OBJETO INTERNACIONAL"),
    ("EQ", "ENCOMENDA SERVIÇO NÃO EXPRESSA ECT"),
    ("ER", "REGISTRADO"),
    ("ES", "e-SEDEX"),
    ("EU", "OBJETO INTERNACIONAL"),
    ("EV", "OBJETO INTERNACIONAL"),
    ("EX", "OBJETO INTERNACIONAL"),
    ("FE", "ENCOMENDA FNDE"),
    ("FF", "REGISTRADO DETRAN"),
    ("FH", "REGISTRADO FAC COM AR DIGITAL"),
    ("FM", "REGISTRADO - FAC MONITORADO"),
    ("FR", "REGISTRADO FAC"),
    ("IA", "INTEGRADA AVULSA"),
    ("IC", "INTEGRADA A COBRAR"),
    ("ID", "INTEGRADA DEVOLUCAO DE DOCUMENTO"),
    ("IE", "INTEGRADA ESPECIAL"),
    ("IF", "CPF"),
    ("II", "INTEGRADA INTERNO"),
    ("IK", "INTEGRADA COM COLETA SIMULTANEA"),
    ("IM", "INTEGRADA MEDICAMENTOS"),
    ("IN", "OBJ DE CORRESP E EMS REC EXTERIOR"),
    ("IP", "INTEGRADA PROGRAMADA"),
    ("IR", "IMPRESSO REGISTRADO"),
    ("IS", "INTEGRADA STANDARD"),
    ("IT", "INTEGRADO TERMOLÁBIL"),
    ("IU", "INTEGRADA URGENTE"),
    ("JA", "REMESSA ECONOMICA C/AR DIGITAL"),
    ("JB", "REMESSA ECONOMICA C/AR DIGITAL"),
    ("JC", "REMESSA ECONOMICA C/AR DIGITAL"),
    ("JJ", "REGISTRADO JUSTIÇA"),
    ("LC", "CARTA EXPRESSA"),
    ("LE", "LOGÍSTICA REVERSA ECONOMICA"),
    ("LF", "OBJETO INTERNACIONAL"),
    ("LI", "OBJETO INTERNACIONAL"),
    ("LJ", "OBJETO INTERNACIONAL"),
    ("LM", "OBJETO INTERNACIONAL"),
    ("LS", "LOGISTICA REVERSA SEDEX"),
    ("LV", "LOGISTICA REVERSA EXPRESSA"),
    ("LX", "CARTA EXPRESSA"),
    ("LY", "CARTA EXPRESSA"),
    ("MA", "SERVIÇOS ADICIONAIS"),
    ("MB", "TELEGRAMA DE BALCÃO"),
    ("MC", "MALOTE CORPORATIVO"),
    ("MD", "SEDEX MUNDI - DOCUMENTO INTERNO"),
    ("ME", "TELEGRAMA"),
    ("MF", "TELEGRAMA FONADO"),
    ("MK", "TELEGRAMA CORPORATIVO"),
    ("MM", "TELEGRAMA GRANDES CLIENTES"),
    ("MP", "TELEGRAMA PRÉ-PAGO"),
    ("MS", "ENCOMENDA SAUDE"),
    ("MT", "TELEGRAMA VIA TELEMAIL"),
    ("MY", "TELEGRAMA INTERNACIONAL ENTRANTE"),
    ("MZ", "TELEGRAMA VIA CORREIOS ON LINE"),
    ("NE", "TELE SENA RESGATADA"),
    ("PA", "PASSAPORTE"),
    ("PB", "ENCOMENDA PAC - NÃO URGENTE"),
    ("PR", "REEMBOLSO POSTAL - CLIENTE AVULSO"),
    ("RA", "REGISTRADO PRIORITÁRIO"),
    ("RB", "CARTA REGISTRADA"),
    ("RC", "CARTA REGISTRADA COM VALOR DECLARADO"),
    ("RD", "REMESSA ECONOMICA DETRAN"),
    ("RE", "REGISTRADO ECONÔMICO"),
    ("RF", "OBJETO DA RECEITA FEDERAL"),
    ("RG", "REGISTRADO DO SISTEMA SARA"),
    ("RH", "REGISTRADO COM AR DIGITAL"),
    ("RI", "REGISTRADO"),
    ("RJ", "REGISTRADO AGÊNCIA"),
    ("RK", "REGISTRADO AGÊNCIA"),
    ("RL", "REGISTRADO LÓGICO"),
    ("RM", "REGISTRADO AGÊNCIA"),
    ("RN", "REGISTRADO AGÊNCIA"),
    ("RO", "REGISTRADO AGÊNCIA"),
    ("RP", "REEMBOLSO POSTAL - CLIENTE INSCRITO"),
    ("RQ", "REGISTRADO AGÊNCIA"),
    ("RR", "CARTA REGISTRADA SEM VALOR DECLARADO"),
    ("RS", "REGISTRADO LÓGICO"),
    ("RT", "REM ECON TALAO/CARTAO SEM AR DIGITA"),
    ("RU", "REGISTRADO SERVIÇO ECT"),
    ("RV", "REM ECON CRLV/CRV/CNH COM AR DIGITAL"),
    ("RW", "OBJETO INTERNACIONAL"),
    ("RX", "OBJETO INTERNACIONAL"),
    ("RY", "REM ECON TALAO/CARTAO COM AR DIGITAL"),
    ("RZ", "REGISTRADO"),
    ("SA", "SEDEX ANOREG"),
    ("SC", "SEDEX A COBRAR"),
    ("SD", "REMESSA EXPRESSA DETRAN"),
    ("SE", "ENCOMENDA SEDEX"),
    ("SF", "SEDEX AGÊNCIA"),
    ("SG", "SEDEX DO SISTEMA SARA"),
    ("SI", "SEDEX AGÊNCIA"),
    ("SJ", "SEDEX HOJE"),
    ("SK", "SEDEX AGÊNCIA"),
    ("SL", "SEDEX LÓGICO"),
    ("SM", "SEDEX MESMO DIA"),
    ("SN", "SEDEX COM VALOR DECLARADO"),
    ("SO", "SEDEX AGÊNCIA"),
    ("SP", "SEDEX PRÉ-FRANQUEADO"),
    ("SQ", "SEDEX"),
    ("SR", "SEDEX"),
    ("SS", "SEDEX FÍSICO"),
    ("ST", "REM EXPRES TALAO/CARTAO SEM AR DIGITAL"),
    ("SU", "ENCOMENDA SERVIÇO EXPRESSA ECT"),
    ("SV", "REM EXPRES CRLV/CRV/CNH COM AR DIGITAL"),
    ("SW", "e-SEDEX"),
    ("SX", "SEDEX 10"),
    ("SY", "REM EXPRES TALAO/CARTAO COM AR DIGITAL"),
    ("SZ", "SEDEX AGÊNCIA"),
    ("TE", "TESTE (OBJETO PARA TREINAMENTO)"),
    ("TS", "TESTE (OBJETO PARA TREINAMENTO)"),
    ("VA", "ENCOMENDAS COM VALOR DECLARADO"),
    ("VC", "ENCOMENDAS"),
    ("VD", "ENCOMENDAS COM VALOR DECLARADO"),
    ("VE", "ENCOMENDAS"),
    ("VF", "ENCOMENDAS COM VALOR DECLARADO"),
    ("VV", "OBJETO INTERNACIONAL"),
    ("XM", "SEDEX MUNDI"),
    ("XR", "ENCOMENDA SUR POSTAL EXPRESSO"),
    ("XX", "ENCOMENDA SUR POSTAL 24 HORAS"),
];

pub(crate) static COUNTRIES: &[(&str, &str)] = &[
    ("AD", "ANDORRA"),
    ("AE", "EMIRADOS ÁRABES UNIDOS"),
    ("AF", "AFEGANISTÃO"),
    ("AG", "ANTÍGUA E BARBUDA"),
    ("AI", "ANGUILLA"),
    ("AL", "ALBÂNIA"),
    ("AM", "ARMÊNIA"),
    ("AO", "ANGOLA"),
    ("AQ", "ANTÁRTIDA"),
    ("AR", "ARGENTINA"),
    ("AS", "SAMOA AMERICANA"),
    ("AT", "ÁUSTRIA"),
    ("AU", "AUSTRÁLIA"),
    ("AW", "ARUBA"),
    ("AX", "ILHAS ALAND"),
    ("AZ", "AZERBAIJÃO"),
    ("BA", "BÓSNIA E HERZEGOVINA"),
    ("BB", "BARBADOS"),
    ("BD", "BANGLADESH"),
    ("BE", "BÉLGICA"),
    ("BF", "BURKINA FASO"),
    ("BG", "BULGÁRIA"),
    ("BH", "BAHREIN"),
    ("BI", "BURUNDI"),
    ("BJ", "BENIN"),
    ("BL", "SÃO BARTOLOMEU"),
    ("BM", "BERMUDAS"),
    ("BN", "BRUNEI"),
    ("BO", "BOLÍVIA"),
    ("BQ", "PAÍSES BAIXOS CARIBENHOS"),
    ("BR", "BRASIL"),
    ("BS", "BAHAMAS"),
    ("BT", "BUTÃO"),
    ("BV", "ILHA BOUVET"),
    ("BW", "BOTSUANA"),
    ("BY", "BIELORRÚSSIA"),
    ("BZ", "BELIZE"),
    ("CA", "CANADÁ"),
    ("CC", "ILHAS COCOS"),
    ("CD", "REPÚBLICA DEMOCRÁTICA DO CONGO"),
    ("CF", "REPÚBLICA CENTRO-AFRICANA"),
    ("CG", "CONGO"),
    ("CH", "SUÍÇA"),
    ("CI", "COSTA DO MARFIM"),
    ("CK", "ILHAS COOK"),
    ("CL", "CHILE"),
    ("CM", "CAMARÕES"),
    ("CN", "CHINA"),
    ("CO", "COLÔMBIA"),
    ("CR", "COSTA RICA"),
    ("CU", "CUBA"),
    ("CV", "CABO VERDE"),
    ("CW", "CURAÇAO"),
    ("CX", "ILHA CHRISTMAS"),
    ("CY", "CHIPRE"),
    ("CZ", "REPÚBLICA TCHECA"),
    ("DE", "ALEMANHA"),
    ("DJ", "DJIBUTI"),
    ("DK", "DINAMARCA"),
    ("DM", "DOMINICA"),
    ("DO", "REPÚBLICA DOMINICANA"),
    ("DZ", "ARGÉLIA"),
    ("EC", "EQUADOR"),
    ("EE", "ESTÔNIA"),
    ("EG", "EGITO"),
    ("EH", "SAARA OCIDENTAL"),
    ("ER", "ERITREIA"),
    ("ES", "ESPANHA"),
    ("ET", "ETIÓPIA"),
    ("FI", "FINLÂNDIA"),
    ("FJ", "FIJI"),
    ("FK", "ILHAS MALVINAS"),
    ("FM", "MICRONÉSIA"),
    ("FO", "ILHAS FAROÉ"),
    ("FR", "FRANÇA"),
    ("GA", "GABÃO"),
    ("GB", "REINO UNIDO"),
    ("GD", "GRANADA"),
    ("GE", "GEÓRGIA"),
    ("GF", "GUIANA FRANCESA"),
    ("GG", "GUERNSEY"),
    ("GH", "GANA"),
    ("GI", "GIBRALTAR"),
    ("GL", "GROENLÂNDIA"),
    ("GM", "GÂMBIA"),
    ("GN", "GUINÉ"),
    ("GP", "GUADALUPE"),
    ("GQ", "GUINÉ EQUATORIAL"),
    ("GR", "GRÉCIA"),
    ("GS", "ILHAS GEÓRGIA DO SUL E SANDWICH DO SUL"),
    ("GT", "GUATEMALA"),
    ("GU", "GUAM"),
    ("GW", "GUINÉ-BISSAU"),
    ("GY", "GUIANA"),
    ("HK", "HONG KONG"),
    ("HM", "ILHAS HEARD E MCDONALD"),
    ("HN", "HONDURAS"),
    ("HR", "CROÁCIA"),
    ("HT", "HAITI"),
    ("HU", "HUNGRIA"),
    ("ID", "INDONÉSIA"),
    ("IE", "IRLANDA"),
    ("IL", "ISRAEL"),
    ("IM", "ILHA DE MAN"),
    ("IN", "ÍNDIA"),
    ("IO", "TERRITÓRIO BRITÂNICO DO OCEANO ÍNDICO"),
    ("IQ", "IRAQUE"),
    ("IR", "IRÃ"),
    ("IS", "ISLÂNDIA"),
    ("IT", "ITÁLIA"),
    ("JE", "JERSEY"),
    ("JM", "JAMAICA"),
    ("JO", "JORDÂNIA"),
    ("JP", "JAPÃO"),
    ("KE", "QUÊNIA"),
    ("KG", "QUIRGUISTÃO"),
    ("KH", "CAMBOJA"),
    ("KI", "KIRIBATI"),
    ("KM", "COMORES"),
    ("KN", "SÃO CRISTÓVÃO E NÉVIS"),
    ("KP", "COREIA DO NORTE"),
    ("KR", "COREIA DO SUL"),
    ("KW", "KUWAIT"),
    ("KY", "ILHAS CAYMAN"),
    ("KZ", "CAZAQUISTÃO"),
    ("LA", "LAOS"),
    ("LB", "LÍBANO"),
    ("LC", "SANTA LÚCIA"),
    ("LI", "LIECHTENSTEIN"),
    ("LK", "SRI LANKA"),
    ("LR", "LIBÉRIA"),
    ("LS", "LESOTO"),
    ("LT", "LITUÂNIA"),
    ("LU", "LUXEMBURGO"),
    ("LV", "LETÔNIA"),
    ("LY", "LÍBIA"),
    ("MA", "MARROCOS"),
    ("MC", "MÔNACO"),
    ("MD", "MOLDÁVIA"),
    ("ME", "MONTENEGRO"),
    ("MF", "SÃO MARTINHO"),
    ("MG", "MADAGASCAR"),
    ("MH", "ILHAS MARSHALL"),
    ("MK", "MACEDÔNIA DO NORTE"),
    ("ML", "MALI"),
    ("MM", "MIANMAR"),
    ("MN", "MONGÓLIA"),
    ("MO", "MACAU"),
    ("MP", "ILHAS MARIANAS DO NORTE"),
    ("MQ", "MARTINICA"),
    ("MR", "MAURITÂNIA"),
    ("MS", "MONTSERRAT"),
    ("MT", "MALTA"),
    ("MU", "MAURÍCIO"),
    ("MV", "MALDIVAS"),
    ("MW", "MALAWI"),
    ("MX", "MÉXICO"),
    ("MY", "MALÁSIA"),
    ("MZ", "MOÇAMBIQUE"),
    ("NA", "NAMÍBIA"),
    ("NC", "NOVA CALEDÔNIA"),
    ("NE", "NÍGER"),
    ("NF", "ILHA NORFOLK"),
    ("NG", "NIGÉRIA"),
    ("NI", "NICARÁGUA"),
    ("NL", "HOLANDA"),
    ("NO", "NORUEGA"),
    ("NP", "NEPAL"),
    ("NR", "NAURU"),
    ("NU", "NIUE"),
    ("NZ", "NOVA ZELÂNDIA"),
    ("OM", "OMÃ"),
    ("PA", "PANAMÁ"),
    ("PE", "PERU"),
    ("PF", "POLINÉSIA FRANCESA"),
    ("PG", "PAPUA-NOVA GUINÉ"),
    ("PH", "FILIPINAS"),
    ("PK", "PAQUISTÃO"),
    ("PL", "POLÔNIA"),
    ("PM", "SAINT-PIERRE E MIQUELON"),
    ("PN", "ILHAS PITCAIRN"),
    ("PR", "PORTO RICO"),
    ("PS", "PALESTINA"),
    ("PT", "PORTUGAL"),
    ("PW", "PALAU"),
    ("PY", "PARAGUAI"),
    ("QA", "CATAR"),
    ("RE", "REUNIÃO"),
    ("RO", "ROMÊNIA"),
    ("RS", "SÉRVIA"),
    ("RU", "RÚSSIA"),
    ("RW", "RUANDA"),
    ("SA", "ARÁBIA SAUDITA"),
    ("SB", "ILHAS SALOMÃO"),
    ("SC", "SEICHELES"),
    ("SD", "SUDÃO"),
    ("SE", "SUÉCIA"),
    ("SG", "CINGAPURA"),
    ("SH", "SANTA HELENA"),
    ("SI", "ESLOVÊNIA"),
    ("SJ", "SVALBARD E JAN MAYEN"),
    ("SK", "ESLOVÁQUIA"),
    ("SL", "SERRA LEOA"),
    ("SM", "SAN MARINO"),
    ("SN", "SENEGAL"),
    ("SO", "SOMÁLIA"),
    ("SR", "SURINAME"),
    ("SS", "SUDÃO DO SUL"),
    ("ST", "SÃO TOMÉ E PRÍNCIPE"),
    ("SV", "EL SALVADOR"),
    ("SX", "SÃO MARTINHO (PARTE HOLANDESA)"),
    ("SY", "SÍRIA"),
    ("SZ", "ESSUATÍNI"),
    ("TC", "ILHAS TURKS E CAICOS"),
    ("TD", "CHADE"),
    ("TF", "TERRAS AUSTRAIS FRANCESAS"),
    ("TG", "TOGO"),
    ("TH", "TAILÂNDIA"),
    ("TJ", "TADJIQUISTÃO"),
    ("TK", "TOKELAU"),
    ("TL", "TIMOR-LESTE"),
    ("TM", "TURCOMENISTÃO"),
    ("TN", "TUNÍSIA"),
    ("TO", "TONGA"),
    ("TR", "TURQUIA"),
    ("TT", "TRINIDAD E TOBAGO"),
    ("TV", "TUVALU"),
    ("TW", "TAIWAN"),
    ("TZ", "TANZÂNIA"),
    ("UA", "UCRÂNIA"),
    ("UG", "UGANDA"),
    ("UM", "ILHAS MENORES DISTANTES DOS ESTADOS UNIDOS"),
    ("US", "ESTADOS UNIDOS"),
    ("UY", "URUGUAI"),
    ("UZ", "UZBEQUISTÃO"),
    ("VA", "VATICANO"),
    ("VC", "SÃO VICENTE E GRANADINAS"),
    ("VE", "VENEZUELA"),
    ("VG", "ILHAS VIRGENS BRITÂNICAS"),
    ("VI", "ILHAS VIRGENS AMERICANAS"),
    ("VN", "VIETNÃ"),
    ("VU", "VANUATU"),
    ("WF", "WALLIS E FUTUNA"),
    ("WS", "SAMOA"),
    ("YE", "IÊMEN"),
    ("YT", "MAYOTTE"),
    ("ZA", "ÁFRICA DO SUL"),
    ("ZM", "ZÂMBIA"),
    ("ZW", "ZIMBÁBUE"),
];
