//! Example catalog inserted the first time a database is created
//!
//! Covers a handful of everyday tools so a fresh install has something to
//! search. Nothing depends on these records being present.

/// One record of the example catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedReference {
    pub title: &'static str,
    pub category: &'static str,
    pub content: &'static str,
    pub language: &'static str,
}

const fn seed(
    title: &'static str,
    category: &'static str,
    content: &'static str,
    language: &'static str,
) -> SeedReference {
    SeedReference {
        title,
        category,
        content,
        language,
    }
}

/// The example catalog, in insertion order
pub const SEED_REFERENCES: &[SeedReference] = &[
    // Python
    seed(
        "List Comprehension",
        "Python",
        "squares = [x**2 for x in range(10)]",
        "python",
    ),
    seed(
        "Dictionary Comprehension",
        "Python",
        "squares_dict = {x: x**2 for x in range(5)}",
        "python",
    ),
    seed(
        "Try-Except Block",
        "Python",
        "try:\n    result = 10 / 0\nexcept ZeroDivisionError as e:\n    print(f\"Error: {e}\")",
        "python",
    ),
    seed(
        "Lambda Function",
        "Python",
        "square = lambda x: x ** 2\nprint(square(5))",
        "python",
    ),
    seed(
        "Map and Filter",
        "Python",
        "numbers = [1, 2, 3, 4, 5]\nsquared = list(map(lambda x: x**2, numbers))\nevens = list(filter(lambda x: x % 2 == 0, numbers))",
        "python",
    ),
    seed(
        "String Formatting",
        "Python",
        "name = \"Alice\"\nage = 30\nprint(f\"Name: {name}, Age: {age}\")\nprint(\"Name: {}, Age: {}\".format(name, age))",
        "python",
    ),
    seed(
        "File I/O",
        "Python",
        "with open(\"file.txt\", \"r\") as f:\n    content = f.read()\n    for line in f:\n        print(line.strip())",
        "python",
    ),
    seed(
        "Class Definition",
        "Python",
        "class Dog:\n    def __init__(self, name):\n        self.name = name\n    def bark(self):\n        print(f\"{self.name} barks!\")",
        "python",
    ),
    seed(
        "Virtual Environment",
        "Python",
        "python -m venv venv\nsource venv/bin/activate  # Linux/Mac\nvenv\\Scripts\\activate  # Windows",
        "bash",
    ),
    seed(
        "Pip Install Requirements",
        "Python",
        "pip install -r requirements.txt\npip freeze > requirements.txt",
        "bash",
    ),
    // Docker
    seed(
        "Docker Build",
        "Docker",
        "docker build -t myapp:1.0 .\ndocker build -t myapp:latest --no-cache .",
        "bash",
    ),
    seed(
        "Docker Run Interactive",
        "Docker",
        "docker run -it image_name\ndocker run -it --name container_name image_name /bin/bash",
        "bash",
    ),
    seed(
        "Docker Run with Ports",
        "Docker",
        "docker run -d -p 8080:80 --name webserver nginx",
        "bash",
    ),
    seed(
        "Docker Run with Volumes",
        "Docker",
        "docker run -v /host/path:/container/path image_name\ndocker run -v data:/data -v /code:/app image_name",
        "bash",
    ),
    seed(
        "Docker Environment Variables",
        "Docker",
        "docker run -e DATABASE_URL=postgresql://localhost -e DEBUG=true image_name",
        "bash",
    ),
    seed(
        "Docker Container Management",
        "Docker",
        "docker ps -a\ndocker stop container_id\ndocker start container_id\ndocker rm container_id",
        "bash",
    ),
    seed(
        "Docker Image Management",
        "Docker",
        "docker images\ndocker rmi image_id\ndocker tag image_id new_image_name:tag",
        "bash",
    ),
    seed(
        "Docker Logs",
        "Docker",
        "docker logs container_id\ndocker logs -f container_id  # follow logs\ndocker logs --tail 100 container_id",
        "bash",
    ),
    seed(
        "Docker Network",
        "Docker",
        "docker network create my_network\ndocker run --network my_network --name app1 image_name\ndocker run --network my_network --name app2 image_name",
        "bash",
    ),
    seed(
        "Docker Exec Command",
        "Docker",
        "docker exec -it container_id /bin/bash\ndocker exec container_id ls -la /app",
        "bash",
    ),
    seed(
        "Docker Compose Up",
        "Docker",
        "docker-compose up -d\ndocker-compose up --build\ndocker-compose down",
        "bash",
    ),
    seed(
        "Docker Compose Services",
        "Docker",
        "docker-compose ps\ndocker-compose logs -f service_name\ndocker-compose restart service_name",
        "bash",
    ),
    // Git
    seed(
        "Git Clone Repository",
        "Git",
        "git clone https://github.com/user/repo.git\ngit clone https://github.com/user/repo.git my_folder",
        "bash",
    ),
    seed(
        "Git Add and Commit",
        "Git",
        "git add .\ngit commit -m \"Add new feature\"\ngit commit -am \"Update feature\"",
        "bash",
    ),
    seed(
        "Git Push and Pull",
        "Git",
        "git push origin main\ngit pull origin develop\ngit fetch origin",
        "bash",
    ),
    seed(
        "Git Branch Management",
        "Git",
        "git branch\ngit branch new_branch\ngit checkout new_branch\ngit checkout -b feature/new-feature",
        "bash",
    ),
    seed(
        "Git Merge Branch",
        "Git",
        "git checkout main\ngit merge feature/new-feature\ngit merge --no-ff feature/new-feature",
        "bash",
    ),
    seed(
        "Git Rebase",
        "Git",
        "git rebase main\ngit rebase -i HEAD~3  # interactive rebase last 3 commits",
        "bash",
    ),
    seed(
        "Git Stash",
        "Git",
        "git stash\ngit stash list\ngit stash pop\ngit stash drop",
        "bash",
    ),
    seed(
        "Git Log and Show",
        "Git",
        "git log --oneline\ngit log --graph --all\ngit show commit_hash\ngit diff branch1 branch2",
        "bash",
    ),
    seed(
        "Git Tag",
        "Git",
        "git tag v1.0.0\ngit push origin v1.0.0\ngit tag -l\ngit tag -d v1.0.0",
        "bash",
    ),
    seed(
        "Git Reset and Revert",
        "Git",
        "git reset --soft HEAD~1\ngit reset --hard HEAD~1\ngit revert commit_hash",
        "bash",
    ),
    seed(
        "Git Remote",
        "Git",
        "git remote -v\ngit remote add upstream https://github.com/user/repo.git\ngit remote remove origin",
        "bash",
    ),
    seed(
        "Git Config",
        "Git",
        "git config user.name \"Your Name\"\ngit config user.email \"your@email.com\"\ngit config --global user.name \"Name\"",
        "bash",
    ),
    // YAML
    seed(
        "YAML List",
        "YAML",
        "- item1\n- item2\n- item3",
        "yaml",
    ),
    seed(
        "YAML Dictionary",
        "YAML",
        "key1: value1\nkey2: value2\nkey3: value3",
        "yaml",
    ),
    seed(
        "YAML Nested Structure",
        "YAML",
        "parent:\n  child1: value1\n  child2: value2\n  nested:\n    deep: value",
        "yaml",
    ),
    seed(
        "YAML List of Objects",
        "YAML",
        "items:\n  - id: 1\n    name: Alice\n  - id: 2\n    name: Bob",
        "yaml",
    ),
    seed(
        "YAML Multiline String",
        "YAML",
        "description: |\n  This is a multiline\n  string that preserves\n  line breaks\nfold: >\n  This is folded\n  into a single line",
        "yaml",
    ),
    seed(
        "YAML Anchors and Aliases",
        "YAML",
        "defaults: &defaults\n  timeout: 30\n  retries: 3\nservice1:\n  <<: *defaults\n  name: Service1",
        "yaml",
    ),
    seed(
        "YAML Boolean and Null",
        "YAML",
        "enabled: true\ndisabled: false\nempty: null\nalso_null: ~",
        "yaml",
    ),
    // Kubernetes
    seed(
        "Kubernetes Deployment",
        "Kubernetes",
        "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: my-app\nspec:\n  replicas: 3\n  selector:\n    matchLabels:\n      app: my-app\n  template:\n    metadata:\n      labels:\n        app: my-app\n    spec:\n      containers:\n      - name: app\n        image: my-app:1.0\n        ports:\n        - containerPort: 8080",
        "yaml",
    ),
    seed(
        "Kubernetes Service",
        "Kubernetes",
        "apiVersion: v1\nkind: Service\nmetadata:\n  name: my-service\nspec:\n  type: ClusterIP\n  selector:\n    app: my-app\n  ports:\n  - port: 80\n    targetPort: 8080",
        "yaml",
    ),
    seed(
        "Kubernetes Pod",
        "Kubernetes",
        "apiVersion: v1\nkind: Pod\nmetadata:\n  name: my-pod\nspec:\n  containers:\n  - name: app\n    image: nginx:latest\n    ports:\n    - containerPort: 80",
        "yaml",
    ),
    seed(
        "Kubernetes ConfigMap",
        "Kubernetes",
        "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: app-config\ndata:\n  app.properties: |\n    debug=true\n    log.level=INFO",
        "yaml",
    ),
    seed(
        "Kubernetes Secret",
        "Kubernetes",
        "apiVersion: v1\nkind: Secret\nmetadata:\n  name: db-secret\ntype: Opaque\ndata:\n  username: dXNlcm5hbWU=\n  password: cGFzc3dvcmQ=",
        "yaml",
    ),
    seed(
        "Kubectl Apply",
        "Kubernetes",
        "kubectl apply -f deployment.yaml\nkubectl apply -f service.yaml\nkubectl apply -f configmap.yaml",
        "bash",
    ),
    seed(
        "Kubectl Get Resources",
        "Kubernetes",
        "kubectl get pods\nkubectl get services\nkubectl get deployments\nkubectl get all",
        "bash",
    ),
    seed(
        "Kubectl Describe",
        "Kubernetes",
        "kubectl describe pod pod_name\nkubectl describe service service_name\nkubectl describe node node_name",
        "bash",
    ),
    seed(
        "Kubectl Logs",
        "Kubernetes",
        "kubectl logs pod_name\nkubectl logs -f pod_name\nkubectl logs pod_name -c container_name",
        "bash",
    ),
    seed(
        "Kubectl Exec",
        "Kubernetes",
        "kubectl exec -it pod_name -- /bin/bash\nkubectl exec pod_name -- ls -la /app",
        "bash",
    ),
    // Terraform
    seed(
        "Terraform Provider Block",
        "Terraform",
        "terraform {\n  required_providers {\n    aws = {\n      source  = \"hashicorp/aws\"\n      version = \"~> 5.0\"\n    }\n  }\n}\n\nprovider \"aws\" {\n  region = \"us-east-1\"\n}",
        "terraform",
    ),
    seed(
        "Terraform AWS EC2",
        "Terraform",
        "resource \"aws_instance\" \"web\" {\n  ami           = \"ami-0c55b159cbfafe1f0\"\n  instance_type = \"t2.micro\"\n  tags = {\n    Name = \"web-server\"\n  }\n}",
        "terraform",
    ),
    seed(
        "Terraform Variables",
        "Terraform",
        "variable \"instance_type\" {\n  type    = string\n  default = \"t2.micro\"\n}\n\nvariable \"tags\" {\n  type = map(string)\n  default = {\n    Environment = \"dev\"\n  }\n}",
        "terraform",
    ),
    seed(
        "Terraform Output",
        "Terraform",
        "output \"instance_id\" {\n  value       = aws_instance.web.id\n  description = \"The instance ID\"\n}\n\noutput \"public_ip\" {\n  value = aws_instance.web.public_ip\n}",
        "terraform",
    ),
    seed(
        "Terraform Data Source",
        "Terraform",
        "data \"aws_ami\" \"amazon_linux\" {\n  most_recent = true\n  owners      = [\"amazon\"]\n  filter {\n    name   = \"name\"\n    values = [\"amzn2-ami-hvm-*\"]\n  }\n}",
        "terraform",
    ),
    seed(
        "Terraform Local",
        "Terraform",
        "locals {\n  environment = \"production\"\n  app_name    = \"my-app\"\n  common_tags = {\n    Environment = local.environment\n    Application = local.app_name\n  }\n}",
        "terraform",
    ),
    seed(
        "Terraform Init Plan Apply",
        "Terraform",
        "terraform init\nterraform plan -out=tfplan\nterraform apply tfplan",
        "bash",
    ),
    seed(
        "Terraform Destroy",
        "Terraform",
        "terraform destroy\nterraform destroy -auto-approve",
        "bash",
    ),
    seed(
        "Terraform State",
        "Terraform",
        "terraform state list\nterraform state show resource_type.resource_name\nterraform state rm resource_type.resource_name",
        "bash",
    ),
    // Ansible
    seed(
        "Ansible Playbook Structure",
        "Ansible",
        "---\n- hosts: all\n  become: yes\n  tasks:\n    - name: Update packages\n      apt:\n        update_cache: yes\n    - name: Install nginx\n      apt:\n        name: nginx\n        state: present",
        "yaml",
    ),
    seed(
        "Ansible Install Package",
        "Ansible",
        "- name: Install packages\n  apt:\n    name: \"{{ item }}\"\n    state: present\n  loop:\n    - git\n    - curl\n    - vim",
        "yaml",
    ),
    seed(
        "Ansible Service Management",
        "Ansible",
        "- name: Start nginx\n  service:\n    name: nginx\n    state: started\n    enabled: yes",
        "yaml",
    ),
    seed(
        "Ansible Copy File",
        "Ansible",
        "- name: Copy config file\n  copy:\n    src: /local/config.conf\n    dest: /etc/app/config.conf\n    mode: \"0644\"\n    owner: root\n    group: root",
        "yaml",
    ),
    seed(
        "Ansible Template",
        "Ansible",
        "- name: Deploy template\n  template:\n    src: nginx.conf.j2\n    dest: /etc/nginx/nginx.conf\n    mode: \"0644\"\n  notify: restart nginx",
        "yaml",
    ),
    seed(
        "Ansible Conditionals",
        "Ansible",
        "- name: Task with condition\n  apt:\n    name: nginx\n    state: present\n  when: ansible_os_family == \"Debian\"",
        "yaml",
    ),
    seed(
        "Ansible Variables",
        "Ansible",
        "---\nvars:\n  app_name: myapp\n  app_version: 1.0\n  app_port: 8080\n\ntasks:\n  - debug:\n      msg: \"{{ app_name }} version {{ app_version }}\"",
        "yaml",
    ),
    seed(
        "Ansible Handlers",
        "Ansible",
        "- name: Update nginx config\n  template:\n    src: nginx.conf.j2\n    dest: /etc/nginx/nginx.conf\n  notify: restart nginx\n\nhandlers:\n  - name: restart nginx\n    service:\n      name: nginx\n      state: restarted",
        "yaml",
    ),
    seed(
        "Ansible Inventory",
        "Ansible",
        "[webservers]\nweb1.example.com\nweb2.example.com\n\n[databases]\ndb1.example.com\n\n[all:vars]\nansible_user=ubuntu\nansible_ssh_private_key_file=/home/user/.ssh/id_rsa",
        "yaml",
    ),
    seed(
        "Ansible Run Playbook",
        "Ansible",
        "ansible-playbook playbook.yml\nansible-playbook playbook.yml -i inventory.ini\nansible-playbook playbook.yml -e \"var=value\"",
        "bash",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_records_are_complete() {
        for seed in SEED_REFERENCES {
            assert!(!seed.title.trim().is_empty());
            assert!(!seed.category.trim().is_empty());
            assert!(!seed.content.trim().is_empty());
        }
    }

    #[test]
    fn test_seed_spans_categories() {
        let categories: BTreeSet<&str> = SEED_REFERENCES.iter().map(|s| s.category).collect();
        assert_eq!(
            categories.into_iter().collect::<Vec<_>>(),
            vec!["Ansible", "Docker", "Git", "Kubernetes", "Python", "Terraform", "YAML"]
        );
    }
}
