use std::sync::LazyLock;

use super::entities::{
    Certification, ContactInfo, Course, Education, PersonalInfo, PortfolioData, Project,
    SkillCategory, SocialLink, SocialPlatform,
};

static FALLBACK: LazyLock<PortfolioData> = LazyLock::new(build);

/// Bundled dataset used whenever the spreadsheet is unavailable or a section
/// comes back empty.
pub fn fallback_portfolio() -> &'static PortfolioData {
    &FALLBACK
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build() -> PortfolioData {
    PortfolioData {
        personal_info: PersonalInfo {
            name: "Emanuel Pedrosa".to_string(),
            role: "Analista de B.I.".to_string(),
            profile_pic: "https://cdn.dribbble.com/userupload/17571883/file/original-b7203c6eef585d55772f19f09159150c.jpg?format=webp&resize=400x300&vertical=center".to_string(),
            banner_pic: "https://t4.ftcdn.net/jpg/04/17/78/49/360_F_417784975_igbNzEo84A9VrPIafpJ6hoUDoCVJ656e.jpg".to_string(),
            short_summary: "Transformando dados complexos em inteligência de negócio.".to_string(),
            welcome_message: "Acredito que cada número conta uma história. Meu foco é traduzir essa narrativa em estratégias claras e resultados reais.".to_string(),
            about_me: strings(&[
                "Olá! Sou um Analista de Dados apaixonado por transformar dados brutos em insights acionáveis. Com experiência em SQL, Python e ferramentas de visualização como Tableau e Power BI, eu ajudo empresas a tomar decisões mais inteligentes e orientadas por dados.",
                "Meu objetivo é descobrir as histórias que os dados contam e apresentá-las de forma clara e impactante. Estou sempre buscando novos desafios e oportunidades para aprender e crescer na área de dados.",
            ]),
        },
        contact_info: ContactInfo {
            email: "seuemail@example.com".to_string(),
            social_links: vec![
                SocialLink {
                    name: SocialPlatform::LinkedIn,
                    url: "https://linkedin.com/in/seu-usuario".to_string(),
                    username: "linkedin.com/in/seu-usuario".to_string(),
                },
                SocialLink {
                    name: SocialPlatform::Github,
                    url: "https://github.com/seu-usuario".to_string(),
                    username: "github.com/seu-usuario".to_string(),
                },
            ],
        },
        projects: vec![
            Project {
                title: "Visão Geral de Vendas - Dashboard de BI".to_string(),
                long_description: "Este projeto envolveu a coleta de dados de várias plataformas de mídia social usando APIs e técnicas de web scraping. Os dados foram processados com Python para realizar análise de sentimento e, em seguida, visualizados em um painel interativo em Power BI. O painel permite que as equipes de marketing monitorem a percepção da marca em tempo real, identifiquem tendências e respondam rapidamente ao feedback do cliente.".to_string(),
                image: "https://xperiun.com/wp-content/uploads/2023/04/DASHBOARD_DE_VENDAS4-1024x575.png".to_string(),
                images: strings(&[
                    "https://xperiun.com/wp-content/uploads/2023/04/DASHBOARD_DE_VENDAS4-1024x575.png",
                    "assets/images/Dashboard-BI.png",
                ]),
                tags: strings(&["Power BI", "SQL", "Python", "Web Scraping", "API Rest"]),
                project_url: "#".to_string(),
                featured: true,
            },
            Project {
                title: "Previsão de Vendas com Machine Learning".to_string(),
                long_description: "O desafio era reduzir o excesso de estoque e as faltas de produtos. Utilizando dados históricos de vendas, desenvolvi um modelo de previsão de séries temporais (SARIMA) em Python. O modelo foi treinado e validado, resultando em uma melhoria de 15% na precisão das previsões em comparação com os métodos anteriores. Isso levou a um planejamento de estoque mais eficiente e redução de custos.".to_string(),
                image: "assets/images/sales-forecast/main.png".to_string(),
                images: strings(&[
                    "assets/images/sales-forecast/image1.png",
                    "assets/images/sales-forecast/image2.png",
                    "assets/images/sales-forecast/image3.png",
                ]),
                tags: strings(&["Python", "Scikit-learn", "Pandas", "Jupyter", "Matplotlib"]),
                project_url: "#".to_string(),
                featured: true,
            },
            Project {
                title: "Otimização da Cadeia de Suprimentos".to_string(),
                long_description: "Neste projeto, analisei um grande conjunto de dados de logística para identificar ineficiências na cadeia de suprimentos. Usando SQL para consulta de dados e Tableau para visualização, identifiquei os principais gargalos e propus rotas de entrega otimizadas. A implementação das recomendações resultou em uma economia de 10% nos custos de logística e uma redução no tempo de entrega.".to_string(),
                image: "assets/images/supply-chain/main.png".to_string(),
                images: strings(&[
                    "assets/images/supply-chain/image1.png",
                    "assets/images/supply-chain/image2.png",
                    "assets/images/supply-chain/image3.png",
                ]),
                tags: strings(&["SQL", "Tableau", "Excel", "Otimização de Processos"]),
                project_url: "#".to_string(),
                featured: true,
            },
            Project {
                title: "Dashboard de Análise de Churn".to_string(),
                long_description: "Para ajudar a empresa a entender por que os clientes estavam cancelando seus serviços, criei um dashboard de análise de churn. O painel consolida dados de várias fontes e usa visualizações para destacar os principais fatores de risco, o perfil dos clientes que cancelam e o impacto financeiro do churn. Isso permitiu que a equipe de retenção desenvolvesse estratégias mais focadas e eficazes.".to_string(),
                image: "assets/images/churn-dashboard/main.png".to_string(),
                images: strings(&[
                    "assets/images/churn-dashboard/image1.png",
                    "assets/images/churn-dashboard/image2.png",
                    "assets/images/churn-dashboard/image3.png",
                ]),
                tags: strings(&["Tableau", "SQL", "Customer Success"]),
                project_url: "#".to_string(),
                featured: false,
            },
        ],
        education: vec![
            Education {
                degree: "Mestrado em Ciência de Dados".to_string(),
                institution: "Universidade Exemplo".to_string(),
                period: "2020 - 2022".to_string(),
            },
            Education {
                degree: "Bacharelado em Estatística".to_string(),
                institution: "Universidade Exemplo".to_string(),
                period: "2016 - 2020".to_string(),
            },
        ],
        certifications: vec![
            Certification {
                title: "Google Data Analytics Professional Certificate".to_string(),
                issuer: "Coursera".to_string(),
            },
            Certification {
                title: "Microsoft Certified: Power BI Data Analyst Associate".to_string(),
                issuer: "Microsoft".to_string(),
            },
        ],
        courses: vec![
            Course {
                title: "SQL for Data Science".to_string(),
                issuer: "Coursera".to_string(),
                year: "2021".to_string(),
            },
            Course {
                title: "Deep Learning Specialization".to_string(),
                issuer: "DeepLearning.AI".to_string(),
                year: "2023".to_string(),
            },
        ],
        skills: vec![
            SkillCategory {
                category: "Linguagens e Bancos de Dados".to_string(),
                technologies: strings(&["Python", "R", "SQL", "NoSQL", "PySpark"]),
            },
            SkillCategory {
                category: "Ferramentas de BI e Visualização".to_string(),
                technologies: strings(&["Power BI", "Tableau", "Looker Studio", "Seaborn", "Plotly"]),
            },
            SkillCategory {
                category: "Machine Learning & Estatística".to_string(),
                technologies: strings(&[
                    "Scikit-learn",
                    "Pandas",
                    "NumPy",
                    "TensorFlow",
                    "Keras",
                    "Análise de Regressão",
                ]),
            },
            SkillCategory {
                category: "Cloud & Big Data".to_string(),
                technologies: strings(&["AWS S3", "Google Cloud Platform", "Databricks", "Hadoop"]),
            },
        ],
    }
}
