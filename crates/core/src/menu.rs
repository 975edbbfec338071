use crate::models::{KeyboardLayout, Reply};

/// Quick-reply button labels. Matched verbatim, emoji prefix included.
pub mod labels {
    pub const CONTACT_INFO: &str = "📧 Contact Info";
    pub const SKILLS: &str = "👨‍💻 Skills";
    pub const CODING_SOURCES: &str = "💻 Coding Sources";
    pub const COURSES: &str = "📚 Courses";
    pub const ABOUT_ME: &str = "ℹ️ About Me";
    pub const DONATE_HIRE: &str = "☕ Donate / Hire Me";
    pub const FREE_RESOURCES: &str = "🆓 Free Resources";
    pub const BEGINNER_GUIDE: &str = "👶 Beginner Guide";
    pub const BACK_TO_MAIN: &str = "🔙 Back to Main Menu";
    /// No longer on any keyboard; old clients may still send it.
    pub const PAID_COURSES: &str = "💰 Paid Courses";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPayload {
    Text(&'static str),
    /// The greeting, personalised with the sender's name.
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub payload: MenuPayload,
    pub keyboard: Option<KeyboardLayout>,
    pub disable_web_page_preview: bool,
}

impl MenuOption {
    const fn text(label: &'static str, payload: &'static str) -> Self {
        Self {
            label,
            payload: MenuPayload::Text(payload),
            keyboard: None,
            disable_web_page_preview: false,
        }
    }

    const fn quiet(mut self) -> Self {
        self.disable_web_page_preview = true;
        self
    }

    const fn switching_to(mut self, keyboard: KeyboardLayout) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn render(&self, sender_name: &str) -> Reply {
        let reply = match self.payload {
            MenuPayload::Text(text) => Reply::markdown(text),
            MenuPayload::Welcome => Reply::plain(welcome_text(sender_name)),
        };
        let reply = if self.disable_web_page_preview {
            reply.without_preview()
        } else {
            reply
        };
        match self.keyboard {
            Some(keyboard) => reply.with_keyboard(keyboard),
            None => reply,
        }
    }
}

pub const CONTACT_INFO_TEXT: &str = "📧 **Contact Information**\n\n\
• **Email**: shubhamteli2628@gmail.com\n\
• **LinkedIn**: [Insert LinkedIn URL]\n\
• **GitHub**: [Insert GitHub URL]\n\
• **Phone**: [Insert Phone Number]";

pub const SKILLS_TEXT: &str = "👨‍💻 **Technical Skills**\n\n\
• **Languages**: Python, JavaScript, C++, HTML/CSS\n\
• **Frameworks**: React, Node.js, Express\n\
• **Tools**: Git, Docker, VS Code\n\
• **Database**: MongoDB, SQL";

pub const CODING_SOURCES_TEXT: &str = "💻 **Coding Language Sources & Docs**\n\n\
Official documentation and best references:\n\n\
🐍 **Python**: [Official Docs](https://docs.python.org/3/) | [Real Python](https://realpython.com/)\n\
🌐 **JavaScript**: [MDN Web Docs](https://developer.mozilla.org/en-US/docs/Web/JavaScript) | [JavaScript.info](https://javascript.info/)\n\
🚀 **C++**: [LearnCpp](https://www.learncpp.com/) | [cppreference](https://en.cppreference.com/)\n\
☕ **Java**: [Oracle Docs](https://docs.oracle.com/en/java/) | [Baeldung](https://www.baeldung.com/)\n\
🎨 **HTML/CSS**: [MDN HTML](https://developer.mozilla.org/en-US/docs/Web/HTML) | [CSS-Tricks](https://css-tricks.com/)\n\
🐦 **Flutter/Dart**: [Flutter Docs](https://docs.flutter.dev/)\n\
🗺️ **Roadmap**: [Roadmap.sh](https://roadmap.sh/)";

pub const COURSES_TEXT: &str = "🎓 **Udemy & Paid Courses (Recommended)**\n\n\
**[Udemy](https://www.udemy.com/)** is the default recommendation for learning specific skills.\n\
🔥 **Sale Advice**: Never pay full price! Wait for sales to get courses **under ₹499** ($10).\n\n\
**Top Recommendations on Udemy:**\n\
1. **Python**: 100 Days of Code (Angela Yu)\n\
2. **Web Dev**: The Web Developer Bootcamp (Colt Steele)\n\
3. **React**: React - The Complete Guide (Maximilian Schwarzmüller)\n\n\
👇 **Other Professional Platforms:**\n\
• **Coursera**: For Google/IBM professional certificates.\n\
• **EdX**: For Harvard/MIT university courses.";

pub const BEGINNER_GUIDE_TEXT: &str = "👶 **Absolute Beginner Guide**\n\n\
Never coded before? Start here:\n\n\
1. **[CS50 by Harvard](https://cs50.harvard.edu/x/)**: The best intro to Computer Science (Free).\n\
2. **[Khan Academy](https://www.khanacademy.org/computing/computer-programming)**: Interactive logic building.\n\
3. **[Python for Everybody](https://www.py4e.com/)**: Simplest way to learn Python.\n\
4. **[Scratch](https://scratch.mit.edu/)**: Visual programming to understand logic.";

pub const FREE_RESOURCES_TEXT: &str = "🆓 **Free Learning Resources**\n\n\
**🌐 Web Development**\n\
• [freeCodeCamp](https://www.freecodecamp.org/)\n\
• [The Odin Project](https://www.theodinproject.com/)\n\n\
**💼 Interview Prep**\n\
• [LeetCode](https://leetcode.com/)\n\
• [NeetCode](https://neetcode.io/)\n\n\
**🤖 AI, Data Science & Analytics**\n\
• **Google Data Analytics**: [Coursera](https://www.coursera.org/professional-certificates/google-data-analytics)\n\
• **Google Advanced Data Analytics**: [Coursera](https://www.coursera.org/professional-certificates/google-advanced-data-analytics)\n\
• **IBM Data Science**: [Coursera](https://www.coursera.org/professional-certificates/ibm-data-science)\n\
• **Machine Learning (Andrew Ng)**: [Coursera](https://www.coursera.org/specializations/machine-learning-introduction)\n\
• **Deep Learning**: [deeplearning.ai](https://www.deeplearning.ai/)\n\
• **Kaggle**: [Kaggle Learn](https://www.kaggle.com/learn)\n\
• **Fast.ai**: [Fast.ai (Free)](https://www.fast.ai/)\n\n\
**🏗️ System Design**\n\
• [System Design Primer](https://github.com/donnemartin/system-design-primer)\n\
• [ByteByteGo](https://bytebytego.com/)\n\n\
**☁️ DevOps & Cloud**\n\
• [DevOps Roadmap](https://roadmap.sh/devops)\n\
• [Learn Docker](https://docker-curriculum.com/)";

pub const DONATE_HIRE_TEXT: &str = "☕ **Support & Services**\n\n\
**Hire Me:**\n\
I am available for freelance projects and consulting.\n\
📩 Contact me: shubhamteli2628@gmail.com\n\n\
**Support the Bot:**\n\
If you found this helpful, consider buying me a coffee!\n\
💳 **[Buy Me a Coffee](https://www.buymeacoffee.com/)**";

pub const ABOUT_ME_TEXT: &str = "ℹ️ **About Me**\n\n\
I am a passionate developer eager to build impactful solutions. \
I love coding, learning new technologies, and solving complex problems.";

pub fn welcome_text(sender_name: &str) -> String {
    format!(
        "Hi {sender_name}! 👋\n\n\
         I'm Shubham's Smart Resume Bot. I can help you learn more about him.\n\
         I am also powered by **Google Gemini**! Ask me any coding question.\n\
         Please choose an option below:"
    )
}

/// Greeting shown on `/start` and on the way back from a sub-menu.
pub fn welcome_reply(sender_name: &str) -> Reply {
    Reply::plain(welcome_text(sender_name)).with_keyboard(KeyboardLayout::Main)
}

pub static MENU_OPTIONS: &[MenuOption] = &[
    MenuOption::text(labels::CONTACT_INFO, CONTACT_INFO_TEXT),
    MenuOption::text(labels::SKILLS, SKILLS_TEXT),
    MenuOption::text(labels::CODING_SOURCES, CODING_SOURCES_TEXT),
    MenuOption::text(labels::COURSES, COURSES_TEXT)
        .quiet()
        .switching_to(KeyboardLayout::Courses),
    MenuOption::text(labels::DONATE_HIRE, DONATE_HIRE_TEXT),
    MenuOption::text(labels::ABOUT_ME, ABOUT_ME_TEXT),
    MenuOption::text(labels::FREE_RESOURCES, FREE_RESOURCES_TEXT).quiet(),
    MenuOption::text(labels::BEGINNER_GUIDE, BEGINNER_GUIDE_TEXT),
    MenuOption::text(labels::PAID_COURSES, COURSES_TEXT)
        .quiet()
        .switching_to(KeyboardLayout::Courses),
    MenuOption {
        label: labels::BACK_TO_MAIN,
        payload: MenuPayload::Welcome,
        keyboard: Some(KeyboardLayout::Main),
        disable_web_page_preview: false,
    },
];

/// Exact-label lookup over a fixed option table.
#[derive(Debug, Clone, Copy)]
pub struct MenuRouter {
    options: &'static [MenuOption],
}

impl Default for MenuRouter {
    fn default() -> Self {
        Self::new(MENU_OPTIONS)
    }
}

impl MenuRouter {
    pub fn new(options: &'static [MenuOption]) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'static [MenuOption] {
        self.options
    }

    /// Case-sensitive, untrimmed comparison: body text that merely mentions a
    /// label's words must never trigger a menu action.
    pub fn route(&self, text: &str) -> Option<&'static MenuOption> {
        self.options.iter().find(|option| option.label == text)
    }
}
