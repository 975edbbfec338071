use crate::models::Reply;

/// Trigger condition of a keyword rule, evaluated against lowercased text
/// with plain substring containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Any needle present.
    Any(&'static [&'static str]),
    /// Any of `any` present and none of `none` present.
    AnyExcept {
        any: &'static [&'static str],
        none: &'static [&'static str],
    },
}

impl Trigger {
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Self::Any(needles) => contains_any(lower, needles),
            Self::AnyExcept { any, none } => {
                contains_any(lower, any) && !contains_any(lower, none)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub trigger: Trigger,
    pub payload: &'static str,
}

impl KeywordRule {
    const fn any(
        topic: &'static str,
        needles: &'static [&'static str],
        payload: &'static str,
    ) -> Self {
        Self {
            topic,
            trigger: Trigger::Any(needles),
            payload,
        }
    }

    pub fn reply(&self) -> Reply {
        Reply::markdown(self.payload).without_preview()
    }
}

pub const PYTHON_TEXT: &str = "🐍 **Python Resources**\n\
Here is the best way to learn Python:\n\
• **Course**: [100 Days of Code (Udemy)](https://www.udemy.com/course/100-days-of-code/)\n\
• **Free**: [Python for Everybody](https://www.py4e.com/)\n\
• **Docs**: [Official Documentation](https://docs.python.org/3/)";

pub const JAVASCRIPT_TEXT: &str = "💛 **JavaScript Resources**\n\
• **Course**: [The Complete JavaScript Course (Udemy)](https://www.udemy.com/course/the-complete-javascript-course/)\n\
• **Free**: [JavaScript.info](https://javascript.info/)\n\
• **Docs**: [MDN Web Docs](https://developer.mozilla.org/en-US/docs/Web/JavaScript)";

pub const REACT_TEXT: &str = "⚛️ **React Resources**\n\
• **Course**: [React - The Complete Guide (Udemy)](https://www.udemy.com/course/react-the-complete-guide-incl-redux/)\n\
• **Free**: [React Official Docs](https://react.dev/learn)\n\
• **Practice**: Build a To-Do App first!";

pub const JAVA_TEXT: &str = "☕ **Java Resources**\n\
• **Course**: [Java Programming Masterclass (Udemy)](https://www.udemy.com/course/java-the-complete-java-developer-course/)\n\
• **Free**: [Mooc.fi (University of Helsinki)](https://java-programming.mooc.fi/)";

pub const CPP_TEXT: &str = "🚀 **C++ Resources**\n\
• **Learn**: [LearnCpp.com](https://www.learncpp.com/) (Best text-based resource)\n\
• **Reference**: [cppreference.com](https://en.cppreference.com/w/)";

pub const WEB_TEXT: &str = "🌐 **Web Development Resources**\n\
• **Start Here**: [The Odin Project](https://www.theodinproject.com/)\n\
• **Video**: [FreeCodeCamp on YouTube](https://www.youtube.com/c/Freecodecamp)";

pub const DATA_AI_TEXT: &str = "🤖 **Data Science, Analytics & AI Resources**\n\n\
Here is the complete list for Data & AI:\n\n\
**🎓 Professional Certificates (Coursera)**\n\
• **[Google Data Analytics](https://www.coursera.org/professional-certificates/google-data-analytics)** (Beginner)\n\
• **[Google Advanced Data Analytics](https://www.coursera.org/professional-certificates/google-advanced-data-analytics)** (Python-focused)\n\
• **[IBM Data Science](https://www.coursera.org/professional-certificates/ibm-data-science)**\n\
• **[Google IT Automation with Python](https://www.coursera.org/professional-certificates/google-it-automation)**\n\n\
**🧠 Machine Learning & AI**\n\
• **[Machine Learning Specialization](https://www.coursera.org/specializations/machine-learning-introduction)** (Andrew Ng)\n\
• **[Deep Learning Specialization](https://www.coursera.org/specializations/deep-learning)**\n\
• **[Fast.ai](https://www.fast.ai/)** (Best Logic-First Approach)\n\
• **[Kaggle](https://www.kaggle.com/learn)** (Free Micro-Courses)\n\n\
**math**: [Khan Academy Linear Algebra](https://www.khanacademy.org/math/linear-algebra)";

pub const SYSTEM_DESIGN_TEXT: &str = "🏗️ **System Design Resources**\n\
• **Read**: [System Design Primer (GitHub)](https://github.com/donnemartin/system-design-primer)\n\
• **Watch**: [Gaurav Sen on YouTube](https://www.youtube.com/c/GauravSensei)\n\
• **Practice**: [ByteByteGo](https://bytebytego.com/)";

pub const DEVOPS_TEXT: &str = "☁️ **DevOps & Cloud**\n\
• **Roadmap**: [DevOps Roadmap](https://roadmap.sh/devops)\n\
• **Learn Docker**: [Docker Curriculum](https://docker-curriculum.com/)\n\
• **AWS**: [AWS Free Tier](https://aws.amazon.com/free/)";

pub const NODE_TEXT: &str = "🟢 **Node.js & Express Resources**\n\
• **Course**: [NodeJS - The Complete Guide (Udemy)](https://www.udemy.com/course/nodejs-the-complete-guide/)\n\
• **Free**: [The Odin Project (Node)](https://www.theodinproject.com/paths/full-stack-javascript/courses/nodejs)\n\
• **Docs**: [Node.js Docs](https://nodejs.org/en/docs/)";

pub const DATABASE_TEXT: &str = "🗄️ **Database Resources (SQL & NoSQL)**\n\
• **Course**: [SQL - The Complete Developer's Guide (Udemy)](https://www.udemy.com/course/sql-and-postgresql/)\n\
• **Free**: [W3Schools SQL](https://www.w3schools.com/sql/)\n\
• **Practice**: [SQLZoo](https://sqlzoo.net/)";

pub const GIT_TEXT: &str = "🐙 **Git & GitHub Resources**\n\
• **Course**: [Git & GitHub Bootcamps (Udemy)](https://www.udemy.com/course/git-and-github-bootcamp/)\n\
• **Free**: [Pro Git Book](https://git-scm.com/book/en/v2)\n\
• **Cheatsheet**: [GitHub Git Cheat Sheet](https://education.github.com/git-cheat-sheet-education.pdf)";

pub const TYPESCRIPT_TEXT: &str = "📘 **TypeScript Resources**\n\
• **Course**: [Understanding TypeScript (Udemy)](https://www.udemy.com/course/understanding-typescript/)\n\
• **Free**: [TypeScript Handbook](https://www.typescriptlang.org/docs/)\n\
• **Practice**: [Total TypeScript](https://www.totaltypescript.com/tutorials)";

pub const MOBILE_TEXT: &str = "📱 **Mobile Development**\n\
• **Course**: [Flutter & Dart - The Complete Guide (Udemy)](https://www.udemy.com/course/learn-flutter-dart-to-build-ios-android-apps/)\n\
• **Free**: [Flutter Docs](https://docs.flutter.dev/)\n\
• **Android**: [Android Developers](https://developer.android.com/)";

pub const ANGULAR_VUE_TEXT: &str = "🅰️ **Angular & Vue Resources**\n\
• **Angular**: [Angular Docs](https://angular.io/docs)\n\
• **Vue**: [Vue.js Docs](https://vuejs.org/guide/introduction.html)\n\
• **Course**: Check Udemy for 'Angular - The Complete Guide' (Max S.)";

/// Evaluated top to bottom, first match wins. Order is observable: the
/// JavaScript rule must precede Java, and Java additionally excludes "script".
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::any("python", &["python"], PYTHON_TEXT),
    KeywordRule::any("javascript", &["javascript", "js"], JAVASCRIPT_TEXT),
    KeywordRule::any("react", &["react"], REACT_TEXT),
    KeywordRule {
        topic: "java",
        trigger: Trigger::AnyExcept {
            any: &["java"],
            none: &["script"],
        },
        payload: JAVA_TEXT,
    },
    KeywordRule::any("cpp", &["c++", "cpp"], CPP_TEXT),
    KeywordRule::any("web", &["html", "css", "web"], WEB_TEXT),
    KeywordRule::any(
        "data_ai",
        &["data", "ai", "ml", "analytics", "science"],
        DATA_AI_TEXT,
    ),
    KeywordRule::any(
        "system_design",
        &["system design", "scalability", "architecture"],
        SYSTEM_DESIGN_TEXT,
    ),
    KeywordRule::any(
        "devops",
        &["devops", "cloud", "docker", "kubernetes"],
        DEVOPS_TEXT,
    ),
    KeywordRule::any("node", &["node", "express"], NODE_TEXT),
    KeywordRule::any("database", &["sql", "database", "mongodb"], DATABASE_TEXT),
    KeywordRule::any("git", &["git", "github"], GIT_TEXT),
    // "ts" also hits words like "lists"; kept as is, see DESIGN.md.
    KeywordRule::any("typescript", &["typescript", "ts"], TYPESCRIPT_TEXT),
    KeywordRule::any(
        "mobile",
        &["flutter", "android", "ios", "mobile"],
        MOBILE_TEXT,
    ),
    KeywordRule::any("angular_vue", &["angular", "vue"], ANGULAR_VUE_TEXT),
];

#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    rules: &'static [KeywordRule],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(KEYWORD_RULES)
    }
}

impl KeywordClassifier {
    pub fn new(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }

    pub fn classify(&self, text: &str) -> Option<&'static KeywordRule> {
        let lower = text.to_lowercase();
        self.rules.iter().find(|rule| rule.trigger.matches(&lower))
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
